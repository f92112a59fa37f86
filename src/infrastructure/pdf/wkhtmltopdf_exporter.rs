use async_trait::async_trait;
use std::time::Duration;

use super::command::{PipeError, run_piped};
use crate::domain::invoice::{
  CaptureTarget, ExportError, ExportFileName, ExportedDocument, InvoiceExporter,
};

/// Lays the preview region out with wkhtmltopdf instead of snapshotting it.
///
/// Text stays selectable in the output, at the cost of small layout differences
/// from what the browser shows.
pub struct WkHtmlToPdfExporter {
  wkhtmltopdf_path: String,
  timeout: Duration,
}

impl WkHtmlToPdfExporter {
  pub fn new(wkhtmltopdf_path: Option<String>, timeout: Duration) -> Self {
    let wkhtmltopdf_path = wkhtmltopdf_path.unwrap_or_else(|| "wkhtmltopdf".to_string());

    Self {
      wkhtmltopdf_path,
      timeout,
    }
  }

  fn arguments(region: &CaptureTarget) -> Vec<String> {
    let mut args: Vec<String> = ["--page-size", "A4", "--orientation", "Portrait"]
      .iter()
      .map(|s| s.to_string())
      .collect();

    for side in ["top", "bottom", "left", "right"] {
      args.push(format!("--margin-{}", side));
      args.push("0mm".to_string());
    }

    args.extend([
      "--viewport-size".to_string(),
      format!("{}x1", region.width_px),
      "--background".to_string(),
      "--quiet".to_string(),
      "-".to_string(),
      "-".to_string(),
    ]);
    args
  }
}

#[async_trait]
impl InvoiceExporter for WkHtmlToPdfExporter {
  async fn render_region_to_file(
    &self,
    region: &CaptureTarget,
    file_name: &ExportFileName,
  ) -> Result<ExportedDocument, ExportError> {
    tracing::info!("Generating PDF with {}", self.wkhtmltopdf_path);

    let output = run_piped(
      &self.wkhtmltopdf_path,
      &Self::arguments(region),
      region.html.as_bytes(),
      self.timeout,
    )
    .await
    .map_err(|e| match e {
      PipeError::Spawn(e) => ExportError::BackendUnavailable(format!(
        "wkhtmltopdf not found: {}. Please install wkhtmltopdf.",
        e
      )),
      PipeError::Io(e) => ExportError::Document(format!("wkhtmltopdf execution failed: {}", e)),
      PipeError::TimedOut => ExportError::Timeout(self.timeout.as_secs()),
    })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(ExportError::Document(format!(
        "wkhtmltopdf failed: {}",
        stderr.trim()
      )));
    }

    if !output.stdout.starts_with(b"%PDF-") {
      return Err(ExportError::Document(
        "wkhtmltopdf produced no PDF output".to_string(),
      ));
    }

    Ok(ExportedDocument {
      file_name: file_name.with_extension(self.extension()).to_string(),
      content_type: "application/pdf",
      bytes: output.stdout,
    })
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
  fn test_arguments_request_borderless_a4() {
    let args = WkHtmlToPdfExporter::arguments(&region());

    let size = args.iter().position(|a| a == "--page-size").unwrap();
    assert_eq!(args[size + 1], "A4");
    let top = args.iter().position(|a| a == "--margin-top").unwrap();
    assert_eq!(args[top + 1], "0mm");
    let viewport = args.iter().position(|a| a == "--viewport-size").unwrap();
    assert_eq!(args[viewport + 1], "560x1");
    assert!(args.contains(&"--background".to_string()));
    assert_eq!(&args[args.len() - 2..], ["-", "-"]);
  }

  #[tokio::test]
  async fn test_missing_binary_is_backend_unavailable() {
    let exporter = WkHtmlToPdfExporter::new(
      Some("/nonexistent/wkhtmltopdf".to_string()),
      Duration::from_secs(1),
    );
    let name = ExportFileName::for_client("Acme Inc.", "pdf");

    let result = exporter.render_region_to_file(&region(), &name).await;

    assert!(matches!(result, Err(ExportError::BackendUnavailable(_))));
  }
}
