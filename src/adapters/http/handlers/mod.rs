pub mod demo;
pub mod landing;

use actix_web::{HttpRequest, HttpResponse};
use chrono::{Local, NaiveDate};

use crate::adapters::http::{errors::ApiError, templates::TemplateEngine};
use crate::application::landing::{GetLandingPageCommand, GetLandingPageUseCase};
use crate::domain::Toast;
use crate::domain::invoice::InvoiceDraft;

pub(crate) const LANDING_TEMPLATE: &str = "pages/landing.html.tera";

/// The invoice date shown on the preview is always the server's current day.
pub(crate) fn today() -> NaiveDate {
  Local::now().date_naive()
}

/// Render the whole landing page around `draft`, with `toasts` on top.
pub(crate) fn render_landing_page(
  templates: &TemplateEngine,
  use_case: &GetLandingPageUseCase,
  draft: Option<InvoiceDraft>,
  toasts: Vec<Toast>,
) -> Result<String, ApiError> {
  let state = use_case.execute(GetLandingPageCommand {
    draft,
    testimonial: None,
    toasts,
    today: today(),
  })?;

  let context = tera::Context::from_serialize(&state)?;
  Ok(templates.render(LANDING_TEMPLATE, &context)?)
}

// Fallback for every unknown path
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
  Err(ApiError::NotFound(format!("No page at {}", req.path())))
}
