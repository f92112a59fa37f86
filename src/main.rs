use actix_files as fs;
use actix_governor::Governor;
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoiceai::{
  adapters::http::{
    RequestTraceMiddleware, TemplateEngine, TemplatePreviewRenderer, WebRouteDependencies,
    configure_export_routes, configure_web_routes, export_rate_limit, not_found,
  },
  application::invoice::{
    ExportInvoicePdfUseCase, GenerateInvoiceUseCase, SendInvoiceUseCase, UpdateDraftFieldUseCase,
  },
  application::landing::{
    GetLandingPageUseCase, SelectTestimonialUseCase, SubmitContactFormUseCase,
  },
  domain::invoice::InvoiceExportService,
  infrastructure::{config::Config, pdf::ExporterFactory},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "invoiceai=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting InvoiceAI landing page");

  // Load configuration
  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  tracing::info!("Configuration loaded successfully");

  // Initialize template engine
  let templates = TemplateEngine::new().map_err(|e| {
    tracing::error!("Failed to initialize template engine: {:?}", e);
    std::io::Error::other(format!("Template error: {}", e))
  })?;
  tracing::info!("Template engine initialized");

  // Initialize export pipeline
  let exporter = ExporterFactory::create(&config.export).map_err(|e| {
    tracing::error!("Invalid export configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
  })?;
  let export_service = Arc::new(InvoiceExportService::new(exporter));
  let preview_renderer = Arc::new(TemplatePreviewRenderer::new(
    templates.clone(),
    config.export.region_width_px,
  ));
  tracing::info!("Invoice export initialized ({:?} backend)", config.export.backend);

  // Initialize use cases
  let deps = WebRouteDependencies {
    templates,
    get_landing_page_use_case: Arc::new(GetLandingPageUseCase::new()),
    select_testimonial_use_case: Arc::new(SelectTestimonialUseCase::new()),
    submit_contact_form_use_case: Arc::new(SubmitContactFormUseCase::new()),
    update_draft_field_use_case: Arc::new(UpdateDraftFieldUseCase::new()),
    generate_invoice_use_case: Arc::new(GenerateInvoiceUseCase::new()),
    send_invoice_use_case: Arc::new(SendInvoiceUseCase::new()),
    export_invoice_pdf_use_case: Arc::new(ExportInvoicePdfUseCase::new(
      export_service,
      preview_renderer,
    )),
  };

  // Rate limit exports per client IP
  let export_governor = export_rate_limit(&config.rate_limit).ok_or_else(|| {
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      "rate_limit values must be greater than zero",
    )
  })?;

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add request tracing middleware
      .wrap(RequestTraceMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // PDF export, behind its own rate limiter
      .service(
        web::scope("/demo/export")
          .wrap(Governor::new(&export_governor))
          .configure(configure_export_routes),
      )
      // Landing page and demo routes
      .configure(|cfg| configure_web_routes(cfg, deps.clone()))
      // Static files
      .service(fs::Files::new("/static", "./static"))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
      .default_service(web::to(not_found))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
