use actix_web::{
  HttpRequest, HttpResponse,
  http::{
    StatusCode,
    header::{Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue},
  },
  web,
};
use std::sync::Arc;

use super::{render_landing_page, today};
use crate::adapters::http::{
  dtos::DraftForm, errors::ApiError, middleware::RequestIdExt, templates::TemplateEngine,
};
use crate::application::invoice::{
  ExportInvoicePdfCommand, ExportInvoicePdfUseCase, GenerateInvoiceCommand,
  GenerateInvoiceUseCase, SendInvoiceCommand, SendInvoiceUseCase, UpdateDraftFieldCommand,
  UpdateDraftFieldUseCase,
};
use crate::application::landing::GetLandingPageUseCase;
use crate::domain::Toast;
use crate::domain::invoice::{InvoiceDraft, display_date};

/// Header carrying the notification of a `/demo/export` response as JSON.
pub const NOTIFICATION_HEADER: &str = "X-Notification";

fn draft_from_form(use_case: &UpdateDraftFieldUseCase, form: DraftForm) -> InvoiceDraft {
  use_case
    .execute(UpdateDraftFieldCommand {
      draft: InvoiceDraft::default(),
      edits: form.into_edits(),
    })
    .draft
}

fn notification_header(toast: &Toast) -> Result<String, ApiError> {
  serde_json::to_string(toast)
    .map_err(|e| ApiError::Internal(format!("Failed to serialize notification: {}", e)))
}

fn attachment(file_name: &str) -> ContentDisposition {
  let parameter = if file_name.is_ascii() {
    DispositionParam::Filename(file_name.to_string())
  } else {
    DispositionParam::FilenameExt(ExtendedValue {
      charset: Charset::Ext("UTF-8".to_string()),
      language_tag: None,
      value: file_name.as_bytes().to_vec(),
    })
  };

  ContentDisposition {
    disposition: DispositionType::Attachment,
    parameters: vec![parameter],
  }
}

// POST /demo/preview - Preview fragment for the edited draft
pub async fn preview(
  templates: web::Data<TemplateEngine>,
  update_draft_field_use_case: web::Data<Arc<UpdateDraftFieldUseCase>>,
  form: web::Form<DraftForm>,
) -> Result<HttpResponse, ApiError> {
  let draft = draft_from_form(&update_draft_field_use_case, form.into_inner());

  let mut context = tera::Context::new();
  context.insert("draft", &draft);
  context.insert("invoice_date", &display_date(today()));

  let html = templates.render("partials/invoice_preview.html.tera", &context)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// POST /demo/generate - "Generate Invoice" submit
pub async fn generate(
  templates: web::Data<TemplateEngine>,
  get_landing_page_use_case: web::Data<Arc<GetLandingPageUseCase>>,
  update_draft_field_use_case: web::Data<Arc<UpdateDraftFieldUseCase>>,
  generate_invoice_use_case: web::Data<Arc<GenerateInvoiceUseCase>>,
  form: web::Form<DraftForm>,
) -> Result<HttpResponse, ApiError> {
  let draft = draft_from_form(&update_draft_field_use_case, form.into_inner());
  let response = generate_invoice_use_case.execute(GenerateInvoiceCommand { draft });

  let html = render_landing_page(
    &templates,
    &get_landing_page_use_case,
    Some(response.draft),
    vec![response.notification],
  )?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// POST /demo/send - "Send Invoice" button
pub async fn send(
  templates: web::Data<TemplateEngine>,
  get_landing_page_use_case: web::Data<Arc<GetLandingPageUseCase>>,
  update_draft_field_use_case: web::Data<Arc<UpdateDraftFieldUseCase>>,
  send_invoice_use_case: web::Data<Arc<SendInvoiceUseCase>>,
  form: web::Form<DraftForm>,
) -> Result<HttpResponse, ApiError> {
  let draft = draft_from_form(&update_draft_field_use_case, form.into_inner());
  let response = send_invoice_use_case.execute(SendInvoiceCommand { draft });

  let html = render_landing_page(
    &templates,
    &get_landing_page_use_case,
    Some(response.draft),
    vec![response.notification],
  )?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// POST /demo/export - "Download PDF" button
//
// Success answers with the file itself. Failure re-renders the page with the
// destructive notification so a plain form post still shows something.
pub async fn export(
  req: HttpRequest,
  templates: web::Data<TemplateEngine>,
  get_landing_page_use_case: web::Data<Arc<GetLandingPageUseCase>>,
  update_draft_field_use_case: web::Data<Arc<UpdateDraftFieldUseCase>>,
  export_invoice_pdf_use_case: web::Data<Arc<ExportInvoicePdfUseCase>>,
  form: web::Form<DraftForm>,
) -> Result<HttpResponse, ApiError> {
  let draft = draft_from_form(&update_draft_field_use_case, form.into_inner());

  let response = export_invoice_pdf_use_case
    .execute(ExportInvoicePdfCommand {
      draft: draft.clone(),
      invoice_date: today(),
    })
    .await;

  let notification = notification_header(&response.notification)?;

  match response.document {
    Some(document) if response.success => Ok(
      HttpResponse::Ok()
        .content_type(document.content_type)
        .insert_header(attachment(&document.file_name))
        .insert_header((NOTIFICATION_HEADER, notification))
        .body(document.bytes),
    ),
    _ => {
      tracing::warn!(
        request_id = ?req.request_id().map(|id| id.value()),
        client = %draft.client_name,
        "Invoice export failed, answering with the page"
      );

      let html = render_landing_page(
        &templates,
        &get_landing_page_use_case,
        Some(draft),
        vec![response.notification],
      )?;

      Ok(
        HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY)
          .content_type("text/html")
          .insert_header((NOTIFICATION_HEADER, notification))
          .body(html),
      )
    }
  }
}
