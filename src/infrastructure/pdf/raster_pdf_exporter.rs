use async_trait::async_trait;

use super::image_pdf_writer::ImagePdfWriter;
use super::raster::{RegionRasterizer, encode_png, flatten_onto_background};
use crate::domain::invoice::{
  BackgroundColor, CaptureTarget, ExportError, ExportFileName, ExportedDocument, InvoiceExporter,
  PageSize, RasterScale,
};

/// Snapshot-to-image-to-PDF export.
///
/// 1. rasterize the region at `scale`
/// 2. flatten it onto the opaque background
/// 3. encode the bitmap as PNG
/// 4. embed the PNG at the origin of a single A4 portrait page
pub struct RasterPdfExporter<R> {
  rasterizer: R,
  writer: ImagePdfWriter,
  scale: RasterScale,
  background: BackgroundColor,
}

impl<R: RegionRasterizer> RasterPdfExporter<R> {
  pub fn new(rasterizer: R, scale: RasterScale, background: BackgroundColor) -> Self {
    Self {
      rasterizer,
      writer: ImagePdfWriter::new(PageSize::A4),
      scale,
      background,
    }
  }
}

#[async_trait]
impl<R: RegionRasterizer> InvoiceExporter for RasterPdfExporter<R> {
  async fn render_region_to_file(
    &self,
    region: &CaptureTarget,
    file_name: &ExportFileName,
  ) -> Result<ExportedDocument, ExportError> {
    let bitmap = self.rasterizer.rasterize(region, self.scale).await?;
    let opaque = flatten_onto_background(&bitmap, self.background);
    let png = encode_png(opaque)?;
    let bytes = self.writer.single_page(&png)?;

    Ok(ExportedDocument {
      file_name: file_name.with_extension(self.extension()).to_string(),
      content_type: "application/pdf",
      bytes,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use image::{Rgba, RgbaImage};
  use lopdf::Document;

  /// Paints a transparent bitmap the size the real renderer would produce.
  struct TransparentRasterizer;

  #[async_trait]
  impl RegionRasterizer for TransparentRasterizer {
    async fn rasterize(
      &self,
      region: &CaptureTarget,
      scale: RasterScale,
    ) -> Result<RgbaImage, ExportError> {
      let width = scale.apply(region.width_px);
      Ok(RgbaImage::from_pixel(width, width / 2, Rgba([0, 0, 0, 0])))
    }
  }

  struct BrokenRasterizer;

  #[async_trait]
  impl RegionRasterizer for BrokenRasterizer {
    async fn rasterize(
      &self,
      _region: &CaptureTarget,
      _scale: RasterScale,
    ) -> Result<RgbaImage, ExportError> {
      Err(ExportError::Rasterization("renderer crashed".to_string()))
    }
  }

  fn region() -> CaptureTarget {
    CaptureTarget {
      html: "<div>INVOICE</div>".to_string(),
      width_px: 100,
    }
  }

  #[tokio::test]
  async fn test_export_produces_single_page_pdf() {
    let exporter = RasterPdfExporter::new(
      TransparentRasterizer,
      RasterScale::default(),
      BackgroundColor::DARK,
    );
    let name = ExportFileName::for_client("Acme Inc.", "pdf");

    let document = exporter
      .render_region_to_file(&region(), &name)
      .await
      .unwrap();

    assert_eq!(document.file_name, "invoice-acme-inc..pdf");
    assert_eq!(document.content_type, "application/pdf");
    assert!(document.bytes.starts_with(b"%PDF-"));

    let doc = Document::load_mem(&document.bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
  }

  #[tokio::test]
  async fn test_embedded_image_is_upscaled_and_opaque() {
    let exporter = RasterPdfExporter::new(
      TransparentRasterizer,
      RasterScale::new(3.0).unwrap(),
      BackgroundColor::DARK,
    );
    let name = ExportFileName::for_client("Acme Inc.", "pdf");

    let document = exporter
      .render_region_to_file(&region(), &name)
      .await
      .unwrap();

    let doc = Document::load_mem(&document.bytes).unwrap();
    let page = doc.get_dictionary(*doc.get_pages().get(&1).unwrap()).unwrap();
    let xobjects = page
      .get(b"Resources")
      .unwrap()
      .as_dict()
      .unwrap()
      .get(b"XObject")
      .unwrap()
      .as_dict()
      .unwrap();
    let image_id = xobjects.get(b"Im0").unwrap().as_reference().unwrap();
    let image = doc.get_object(image_id).unwrap().as_stream().unwrap();

    assert_eq!(image.dict.get(b"Width").unwrap().as_i64().unwrap(), 300);
    assert_eq!(image.dict.get(b"ColorSpace").unwrap().as_name().unwrap(), b"DeviceRGB");
    let pixels = image.decompressed_content().unwrap();
    assert!(pixels.chunks(3).all(|p| p == [0x11, 0x11, 0x11]));
  }

  #[tokio::test]
  async fn test_rasterization_error_propagates() {
    let exporter =
      RasterPdfExporter::new(BrokenRasterizer, RasterScale::default(), BackgroundColor::DARK);
    let name = ExportFileName::for_client("Acme Inc.", "pdf");

    let result = exporter.render_region_to_file(&region(), &name).await;

    assert!(matches!(result, Err(ExportError::Rasterization(_))));
  }
}
