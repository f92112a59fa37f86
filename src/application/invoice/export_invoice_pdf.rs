use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::Toast;
use crate::domain::invoice::{ExportedDocument, InvoiceDraft, InvoiceExportService, PreviewRenderer};

#[derive(Debug)]
pub struct ExportInvoicePdfCommand {
  pub draft: InvoiceDraft,
  pub invoice_date: NaiveDate,
}

#[derive(Debug)]
pub struct ExportInvoicePdfResponse {
  pub success: bool,
  pub document: Option<ExportedDocument>,
  pub notification: Toast,
}

/// "Download PDF" button of the preview.
///
/// Renders the preview region for the current draft, hands it to the export
/// service and picks the notification. The cause of a failure never reaches
/// the visitor.
pub struct ExportInvoicePdfUseCase {
  export_service: Arc<InvoiceExportService>,
  preview_renderer: Arc<dyn PreviewRenderer>,
}

impl ExportInvoicePdfUseCase {
  pub fn new(
    export_service: Arc<InvoiceExportService>,
    preview_renderer: Arc<dyn PreviewRenderer>,
  ) -> Self {
    Self {
      export_service,
      preview_renderer,
    }
  }

  pub async fn execute(&self, command: ExportInvoicePdfCommand) -> ExportInvoicePdfResponse {
    let region = match self
      .preview_renderer
      .render_region(&command.draft, command.invoice_date)
    {
      Ok(region) => Some(region),
      Err(e) => {
        tracing::error!("Invoice preview could not be rendered for export: {}", e);
        None
      }
    };

    let outcome = self
      .export_service
      .export(region.as_ref(), &command.draft.client_name)
      .await;

    let notification = if outcome.success {
      Toast::invoice_downloaded()
    } else {
      Toast::download_failed()
    };

    ExportInvoicePdfResponse {
      success: outcome.success,
      document: outcome.document,
      notification,
    }
  }
}
