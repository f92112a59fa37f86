use async_trait::async_trait;
use image::RgbaImage;
use std::time::Duration;

use super::command::{PipeError, run_piped};
use super::raster::RegionRasterizer;
use crate::domain::invoice::{CaptureTarget, ExportError, RasterScale};

/// Rasterizes the preview region by piping its HTML through `wkhtmltoimage`.
pub struct WkHtmlToImageRasterizer {
  binary: String,
  timeout: Duration,
}

impl WkHtmlToImageRasterizer {
  pub fn new(binary: Option<String>, timeout: Duration) -> Self {
    Self {
      binary: binary.unwrap_or_else(|| "wkhtmltoimage".to_string()),
      timeout,
    }
  }

  fn arguments(region: &CaptureTarget, scale: RasterScale) -> Vec<String> {
    vec![
      "--quiet".to_string(),
      "--format".to_string(),
      "png".to_string(),
      "--zoom".to_string(),
      scale.value().to_string(),
      "--width".to_string(),
      scale.apply(region.width_px).to_string(),
      "--disable-smart-width".to_string(),
      // read the page from stdin, write the image to stdout
      "-".to_string(),
      "-".to_string(),
    ]
  }
}

#[async_trait]
impl RegionRasterizer for WkHtmlToImageRasterizer {
  async fn rasterize(
    &self,
    region: &CaptureTarget,
    scale: RasterScale,
  ) -> Result<RgbaImage, ExportError> {
    let output = run_piped(
      &self.binary,
      &Self::arguments(region, scale),
      region.html.as_bytes(),
      self.timeout,
    )
    .await
    .map_err(|e| match e {
      PipeError::Spawn(e) => ExportError::BackendUnavailable(format!(
        "{} could not be started: {}. Please install wkhtmltopdf.",
        self.binary, e
      )),
      PipeError::Io(e) => {
        ExportError::Rasterization(format!("wkhtmltoimage execution failed: {}", e))
      }
      PipeError::TimedOut => ExportError::Timeout(self.timeout.as_secs()),
    })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ExportError::Rasterization(format!(
        "wkhtmltoimage failed: {}",
        stderr.trim()
      )));
    }

    let bitmap = image::load_from_memory(&output.stdout)
      .map_err(|e| ExportError::Rasterization(format!("Unreadable snapshot: {}", e)))?
      .to_rgba8();

    tracing::debug!(
      "Rasterized preview region to {}x{} px",
      bitmap.width(),
      bitmap.height()
    );

    Ok(bitmap)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn region() -> CaptureTarget {
    CaptureTarget {
      html: "<html><body>INVOICE</body></html>".to_string(),
      width_px: 560,
    }
  }

  #[test]
  fn test_arguments_upscale_region_width() {
    let args = WkHtmlToImageRasterizer::arguments(&region(), RasterScale::default());

    let zoom = args.iter().position(|a| a == "--zoom").unwrap();
    assert_eq!(args[zoom + 1], "2");
    let width = args.iter().position(|a| a == "--width").unwrap();
    assert_eq!(args[width + 1], "1120");
    assert_eq!(&args[args.len() - 2..], ["-", "-"]);
  }

  #[tokio::test]
  async fn test_missing_binary_is_backend_unavailable() {
    let rasterizer = WkHtmlToImageRasterizer::new(
      Some("/nonexistent/wkhtmltoimage".to_string()),
      Duration::from_secs(1),
    );

    let result = rasterizer.rasterize(&region(), RasterScale::default()).await;

    assert!(matches!(result, Err(ExportError::BackendUnavailable(_))));
  }
}
