use std::sync::Arc;
use std::time::Duration;

use super::{RasterPdfExporter, WkHtmlToImageRasterizer, WkHtmlToPdfExporter};
use crate::domain::invoice::{ExportError, InvoiceExporter};
use crate::infrastructure::config::{ExportBackend, ExportConfig};

pub struct ExporterFactory;

impl ExporterFactory {
  /// Create the exporter selected by `export.backend`.
  ///
  /// Invalid scale or background values are rejected here so a bad
  /// configuration fails at startup rather than on the first download.
  pub fn create(config: &ExportConfig) -> Result<Arc<dyn InvoiceExporter>, ExportError> {
    let timeout = Duration::from_secs(config.timeout_seconds);

    match config.backend {
      ExportBackend::Raster => {
        let scale = config.raster_scale()?;
        let background = config.background_color()?;
        tracing::debug!(
          "Using raster PDF export (scale {}, background {})",
          scale.value(),
          background.to_hex()
        );

        let rasterizer = WkHtmlToImageRasterizer::new(config.wkhtmltoimage_path.clone(), timeout);
        Ok(Arc::new(RasterPdfExporter::new(rasterizer, scale, background)))
      }

      ExportBackend::Wkhtmltopdf => {
        tracing::debug!("Using wkhtmltopdf export");
        Ok(Arc::new(WkHtmlToPdfExporter::new(
          config.wkhtmltopdf_path.clone(),
          timeout,
        )))
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config_builds_pdf_exporter() {
    let exporter = ExporterFactory::create(&ExportConfig::default()).unwrap();
    assert_eq!(exporter.extension(), "pdf");
  }

  #[test]
  fn test_wkhtmltopdf_backend_ignores_raster_settings() {
    let config = ExportConfig {
      backend: ExportBackend::Wkhtmltopdf,
      scale: -1.0,
      ..Default::default()
    };

    assert!(ExporterFactory::create(&config).is_ok());
  }

  #[test]
  fn test_invalid_raster_settings_are_rejected() {
    let config = ExportConfig {
      background: "#zzzzzz".to_string(),
      ..Default::default()
    };

    let result = ExporterFactory::create(&config);
    assert!(matches!(result, Err(ExportError::Settings(_))));
  }
}
