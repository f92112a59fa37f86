use std::sync::Arc;

use super::ports::{CaptureTarget, ExportedDocument, InvoiceExporter};
use super::value_objects::ExportFileName;

/// Result of one export attempt.
///
/// `document` is present exactly when `success` is true; the caller turns it
/// into a download and picks the notification from `success`.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
  pub success: bool,
  pub document: Option<ExportedDocument>,
}

impl ExportOutcome {
  fn failed() -> Self {
    Self {
      success: false,
      document: None,
    }
  }
}

/// Runs the preview export through whichever backend is configured.
///
/// Failures are logged and reduced to `success = false`; nothing is retried and
/// concurrent exports are not coordinated.
pub struct InvoiceExportService {
  exporter: Arc<dyn InvoiceExporter>,
}

impl InvoiceExportService {
  pub fn new(exporter: Arc<dyn InvoiceExporter>) -> Self {
    Self { exporter }
  }

  pub async fn export(&self, region: Option<&CaptureTarget>, client_name: &str) -> ExportOutcome {
    let Some(region) = region else {
      tracing::warn!("Invoice export skipped: capture target is not available");
      return ExportOutcome::failed();
    };

    let file_name = ExportFileName::for_client(client_name, self.exporter.extension());

    match self.exporter.render_region_to_file(region, &file_name).await {
      Ok(document) => {
        tracing::info!(
          "Exported invoice preview as {} ({} bytes)",
          document.file_name,
          document.bytes.len()
        );
        ExportOutcome {
          success: true,
          document: Some(document),
        }
      }
      Err(e) => {
        tracing::error!("Error generating PDF: {}", e);
        ExportOutcome::failed()
      }
    }
  }
}
