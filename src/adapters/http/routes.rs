use actix_governor::{
  GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use std::sync::Arc;

use crate::application::invoice::{
  ExportInvoicePdfUseCase, GenerateInvoiceUseCase, SendInvoiceUseCase, UpdateDraftFieldUseCase,
};
use crate::application::landing::{
  GetLandingPageUseCase, SelectTestimonialUseCase, SubmitContactFormUseCase,
};
use crate::infrastructure::config::RateLimitConfig;

use super::handlers::{demo, landing};
use super::templates::TemplateEngine;

/// Everything the landing page routes need
#[derive(Clone)]
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub get_landing_page_use_case: Arc<GetLandingPageUseCase>,
  pub select_testimonial_use_case: Arc<SelectTestimonialUseCase>,
  pub submit_contact_form_use_case: Arc<SubmitContactFormUseCase>,
  pub update_draft_field_use_case: Arc<UpdateDraftFieldUseCase>,
  pub generate_invoice_use_case: Arc<GenerateInvoiceUseCase>,
  pub send_invoice_use_case: Arc<SendInvoiceUseCase>,
  pub export_invoice_pdf_use_case: Arc<ExportInvoicePdfUseCase>,
}

/// Configure the landing page and demo routes
///
/// # Routes
///
/// - GET / - Full landing page, `?testimonial=i` preselects a testimonial
/// - GET /testimonials/{index} - Carousel fragment
/// - POST /contact - Contact form
/// - POST /demo/preview - Preview fragment for the edited draft
/// - POST /demo/generate - Generate Invoice
/// - POST /demo/send - Send Invoice
///
/// The export route is mounted separately by [`configure_export_routes`] so
/// it can sit behind its own rate limiter; it reads the same app data.
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.get_landing_page_use_case))
    .app_data(web::Data::new(deps.select_testimonial_use_case))
    .app_data(web::Data::new(deps.submit_contact_form_use_case))
    .app_data(web::Data::new(deps.update_draft_field_use_case))
    .app_data(web::Data::new(deps.generate_invoice_use_case))
    .app_data(web::Data::new(deps.send_invoice_use_case))
    .app_data(web::Data::new(deps.export_invoice_pdf_use_case));

  cfg
    .route("/", web::get().to(landing::landing_page))
    .route(
      "/testimonials/{index}",
      web::get().to(landing::testimonial_carousel),
    )
    .route("/contact", web::post().to(landing::submit_contact))
    .route("/demo/preview", web::post().to(demo::preview))
    .route("/demo/generate", web::post().to(demo::generate))
    .route("/demo/send", web::post().to(demo::send));
}

/// Configure the PDF export route
///
/// Mount inside a `/demo/export` scope.
pub fn configure_export_routes(cfg: &mut web::ServiceConfig) {
  cfg.route("", web::post().to(demo::export));
}

/// Rate limiter for the export scope, keyed by client IP
pub type ExportRateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Build the export rate limiter. Returns `None` if either setting is zero.
pub fn export_rate_limit(config: &RateLimitConfig) -> Option<ExportRateLimit> {
  GovernorConfigBuilder::default()
    .per_second(config.export_replenish_seconds)
    .burst_size(config.export_burst_size)
    .finish()
}
