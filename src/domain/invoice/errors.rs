use super::value_objects::ValueObjectError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
  #[error("Capture target is not available")]
  CaptureTargetMissing,

  #[error("Rasterization failed: {0}")]
  Rasterization(String),

  #[error("Image encoding failed: {0}")]
  Encoding(String),

  #[error("Document construction failed: {0}")]
  Document(String),

  #[error("Export backend unavailable: {0}")]
  BackendUnavailable(String),

  #[error("Export timed out after {0} seconds")]
  Timeout(u64),

  #[error("Invalid export settings: {0}")]
  Settings(#[from] ValueObjectError),
}

#[derive(Debug, Error)]
pub enum PreviewError {
  #[error("Preview rendering failed: {0}")]
  Render(String),
}
