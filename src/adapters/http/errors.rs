use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::landing::LandingError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Unknown resource (404 Not Found)
  NotFound(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::NotFound(msg) => ("not_found", msg.clone()),
      ApiError::Internal(msg) => {
        // Don't expose internal error details
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert LandingError to ApiError
impl From<LandingError> for ApiError {
  fn from(error: LandingError) -> Self {
    match error {
      LandingError::TestimonialOutOfRange { .. } => ApiError::Validation(error.to_string()),
    }
  }
}

/// Template failures are never the visitor's fault
impl From<tera::Error> for ApiError {
  fn from(error: tera::Error) -> Self {
    ApiError::Internal(format!("Template rendering failed: {:?}", error))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::NotFound("test".to_string()).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_landing_error_conversion() {
    let api_error: ApiError = LandingError::TestimonialOutOfRange { index: 9, len: 3 }.into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn test_internal_error_hides_details() {
    let response = ApiError::Internal("template foo.html.tera missing".to_string()).error_response();

    let body = to_bytes(response.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "internal_error");
    assert!(!json["message"].as_str().unwrap().contains("foo"));
  }
}
