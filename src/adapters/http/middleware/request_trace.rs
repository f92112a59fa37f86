use actix_web::{
  Error, HttpMessage,
  body::MessageBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  http::header::{HeaderName, HeaderValue},
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  time::Instant,
};
use tracing::Instrument;
use uuid::Uuid;

/// Request tracing middleware
///
/// Every request gets a UUID v4 that is:
/// - stored in request extensions as [`RequestId`]
/// - recorded on a `request` span wrapping the rest of the pipeline, so
///   everything the handlers log carries it
/// - echoed back in the `X-Request-ID` response header
#[derive(Debug, Clone, Default)]
pub struct RequestTraceMiddleware;

impl RequestTraceMiddleware {
  pub fn new() -> Self {
    Self
  }
}

impl<S, B> Transform<S, ServiceRequest> for RequestTraceMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = RequestTraceMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(RequestTraceMiddlewareService {
      service: Rc::new(service),
    }))
  }
}

pub struct RequestTraceMiddlewareService<S> {
  service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);

    let request_id = RequestId::new();
    req.extensions_mut().insert(request_id);

    let span = tracing::info_span!(
      "request",
      request_id = %request_id,
      method = %req.method(),
      path = %req.path(),
    );

    Box::pin(
      async move {
        let started = Instant::now();
        let mut res = service.call(req).await?;

        tracing::debug!(
          status = res.status().as_u16(),
          elapsed_ms = started.elapsed().as_millis() as u64,
          "Request finished"
        );

        res.headers_mut().insert(
          HeaderName::from_static("x-request-id"),
          HeaderValue::from_str(&request_id.as_str())
            .unwrap_or_else(|_| HeaderValue::from_static("invalid-uuid")),
        );

        Ok(res)
      }
      .instrument(span),
    )
  }
}

/// Request ID wrapper for UUID
#[derive(Debug, Clone, Copy)]
pub struct RequestId(pub Uuid);

impl RequestId {
  pub fn new() -> Self {
    Self(Uuid::new_v4())
  }

  pub fn value(&self) -> Uuid {
    self.0
  }

  pub fn as_str(&self) -> String {
    self.0.to_string()
  }
}

impl Default for RequestId {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Display for RequestId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Extension trait to easily extract request ID from request
pub trait RequestIdExt {
  /// Returns None when the middleware is not configured.
  fn request_id(&self) -> Option<RequestId>;
}

impl RequestIdExt for actix_web::HttpRequest {
  fn request_id(&self) -> Option<RequestId> {
    self.extensions().get::<RequestId>().cloned()
  }
}
