use async_trait::async_trait;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage, RgbaImage};
use std::io::Cursor;

use crate::domain::invoice::{BackgroundColor, CaptureTarget, ExportError, RasterScale};

/// Turns a capture target into a bitmap.
#[async_trait]
pub trait RegionRasterizer: Send + Sync {
  async fn rasterize(
    &self,
    region: &CaptureTarget,
    scale: RasterScale,
  ) -> Result<RgbaImage, ExportError>;
}

/// Composite `bitmap` over an opaque `background`, dropping the alpha channel.
pub fn flatten_onto_background(bitmap: &RgbaImage, background: BackgroundColor) -> RgbImage {
  let bg = [background.r, background.g, background.b];

  RgbImage::from_fn(bitmap.width(), bitmap.height(), |x, y| {
    let [r, g, b, a] = bitmap.get_pixel(x, y).0;
    let alpha = a as u32;
    let blend = |src: u8, dst: u8| -> u8 {
      ((src as u32 * alpha + dst as u32 * (255 - alpha) + 127) / 255) as u8
    };
    Rgb([blend(r, bg[0]), blend(g, bg[1]), blend(b, bg[2])])
  })
}

/// Lossless PNG encoding of an opaque bitmap.
pub fn encode_png(bitmap: RgbImage) -> Result<Vec<u8>, ExportError> {
  let mut buffer = Cursor::new(Vec::new());
  DynamicImage::ImageRgb8(bitmap)
    .write_to(&mut buffer, ImageOutputFormat::Png)
    .map_err(|e| ExportError::Encoding(e.to_string()))?;
  Ok(buffer.into_inner())
}
