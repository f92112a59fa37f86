use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::domain::invoice::{ExportError, PageSize};

const IMAGE_NAME: &[u8] = b"Im0";

/// Builds a one-page portrait PDF holding a single image.
///
/// The image is stretched to the page width with its aspect ratio kept and is
/// anchored at the top-left corner. Images taller than the page run off the
/// bottom edge.
pub struct ImagePdfWriter {
  page: PageSize,
}

impl ImagePdfWriter {
  pub fn new(page: PageSize) -> Self {
    Self { page }
  }

  pub fn single_page(&self, png: &[u8]) -> Result<Vec<u8>, ExportError> {
    let bitmap = image::load_from_memory(png)
      .map_err(|e| ExportError::Encoding(format!("Unreadable PNG: {}", e)))?
      .to_rgb8();
    let (pixel_width, pixel_height) = bitmap.dimensions();

    let page_width = self.page.width_pt();
    let page_height = self.page.height_pt();
    let image_width = page_width;
    let image_height = PageSize::to_points(self.page.scaled_height_mm(pixel_width, pixel_height));

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut image_stream = Stream::new(
      dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => pixel_width as i64,
        "Height" => pixel_height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
      },
      bitmap.into_raw(),
    );
    // Falls back to an uncompressed stream when Flate fails
    let _ = image_stream.compress();
    let image_id = doc.add_object(image_stream);

    // PDF space grows upwards, so the top-left anchor sits at page_height - image_height
    let content = Content {
      operations: vec![
        Operation::new("q", vec![]),
        Operation::new(
          "cm",
          vec![
            image_width.into(),
            0.into(),
            0.into(),
            image_height.into(),
            0.into(),
            (page_height - image_height).into(),
          ],
        ),
        Operation::new("Do", vec![Object::Name(IMAGE_NAME.to_vec())]),
        Operation::new("Q", vec![]),
      ],
    };
    let content_bytes = content
      .encode()
      .map_err(|e| ExportError::Document(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content_bytes));

    let page_id = doc.add_object(dictionary! {
      "Type" => "Page",
      "Parent" => pages_id,
      "Contents" => content_id,
      "Resources" => dictionary! {
        "XObject" => dictionary! {
          "Im0" => image_id,
        },
      },
      "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
    });

    let pages = dictionary! {
      "Type" => "Pages",
      "Kids" => vec![page_id.into()],
      "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
      "Type" => "Catalog",
      "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc
      .save_to(&mut bytes)
      .map_err(|e| ExportError::Document(e.to_string()))?;

    tracing::debug!(
      "Embedded {}x{} px image into a {:.0}x{:.0} pt page",
      pixel_width,
      pixel_height,
      page_width,
      page_height
    );

    Ok(bytes)
  }
}

impl Default for ImagePdfWriter {
  fn default() -> Self {
    Self::new(PageSize::A4)
  }
}
