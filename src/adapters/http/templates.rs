use chrono::NaiveDate;
use std::sync::Arc;
use tera::Tera;

use crate::domain::invoice::{
  CaptureTarget, InvoiceDraft, PreviewError, PreviewRenderer, display_date,
};

/// Template engine wrapper for rendering HTML templates
#[derive(Clone)]
pub struct TemplateEngine {
  tera: Arc<Tera>,
}

impl TemplateEngine {
  /// Create a new template engine instance
  pub fn new() -> Result<Self, tera::Error> {
    let mut tera = Tera::new("templates/**/*.html.tera")?;
    tera.autoescape_on(vec!["html.tera", ".html"]);

    Ok(Self {
      tera: Arc::new(tera),
    })
  }

  /// Render a template with the given context
  pub fn render(&self, template: &str, context: &tera::Context) -> Result<String, tera::Error> {
    self.tera.render(template, context)
  }
}

/// Renders the invoice preview on its own, as a standalone document the
/// export backends can capture.
pub struct TemplatePreviewRenderer {
  templates: TemplateEngine,
  region_width_px: u32,
}

impl TemplatePreviewRenderer {
  pub const TEMPLATE: &'static str = "export/invoice_region.html.tera";

  pub fn new(templates: TemplateEngine, region_width_px: u32) -> Self {
    Self {
      templates,
      region_width_px,
    }
  }
}

impl PreviewRenderer for TemplatePreviewRenderer {
  fn render_region(
    &self,
    draft: &InvoiceDraft,
    invoice_date: NaiveDate,
  ) -> Result<CaptureTarget, PreviewError> {
    let mut context = tera::Context::new();
    context.insert("draft", draft);
    context.insert("invoice_date", &display_date(invoice_date));
    context.insert("width_px", &self.region_width_px);

    let html = self
      .templates
      .render(Self::TEMPLATE, &context)
      .map_err(|e| PreviewError::Render(format!("{:?}", e)))?;

    Ok(CaptureTarget {
      html,
      width_px: self.region_width_px,
    })
  }
}
