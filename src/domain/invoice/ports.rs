use async_trait::async_trait;
use chrono::NaiveDate;

use super::entities::InvoiceDraft;
use super::errors::{ExportError, PreviewError};
use super::value_objects::ExportFileName;

/// Handle to the rendered invoice preview region.
///
/// `html` is a standalone document containing only the preview, laid out at
/// `width_px` CSS pixels, which is what a backend captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget {
  pub html: String,
  pub width_px: u32,
}

/// A finished export, ready to be offered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
  pub file_name: String,
  pub content_type: &'static str,
  pub bytes: Vec<u8>,
}

#[async_trait]
pub trait InvoiceExporter: Send + Sync {
  /// File extension of the documents this backend produces.
  fn extension(&self) -> &'static str {
    "pdf"
  }

  async fn render_region_to_file(
    &self,
    region: &CaptureTarget,
    file_name: &ExportFileName,
  ) -> Result<ExportedDocument, ExportError>;
}

pub trait PreviewRenderer: Send + Sync {
  fn render_region(
    &self,
    draft: &InvoiceDraft,
    invoice_date: NaiveDate,
  ) -> Result<CaptureTarget, PreviewError>;
}
