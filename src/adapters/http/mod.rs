pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod templates;

// Re-export commonly used types
pub use dtos::{ContactForm, DraftForm, ErrorResponse, LandingQuery};
pub use errors::ApiError;
pub use handlers::not_found;
pub use middleware::{RequestId, RequestIdExt, RequestTraceMiddleware};
pub use routes::{
  ExportRateLimit, WebRouteDependencies, configure_export_routes, configure_web_routes,
  export_rate_limit,
};
pub use templates::{TemplateEngine, TemplatePreviewRenderer};
