use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Literal tag every exported file name starts with.
pub const FILE_NAME_PREFIX: &str = "invoice-";

lazy_static! {
  static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid whitespace pattern");
}

/// Short US-style date shown as the preview's invoice date, e.g. `5/15/2025`.
pub fn display_date(date: NaiveDate) -> String {
  date.format("%-m/%-d/%Y").to_string()
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Unknown draft field: {0}")]
  UnknownDraftField(String),
  #[error("Invalid raster scale: {0}")]
  InvalidScale(String),
  #[error("Invalid background color: {0}")]
  InvalidColor(String),
}

// Client Slug - normalized client name used in file names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSlug(String);

impl ClientSlug {
  /// Collapses every whitespace run into one hyphen, then lowercases.
  ///
  /// Punctuation is kept as-is, so `"Acme Inc."` becomes `acme-inc.`.
  pub fn from_client_name(client_name: &str) -> Self {
    let hyphenated = WHITESPACE_RUN.replace_all(client_name, "-");
    Self(hyphenated.to_lowercase())
  }

  pub fn value(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ClientSlug {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Export File Name - `invoice-<slug>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFileName {
  slug: ClientSlug,
  extension: String,
}

impl ExportFileName {
  pub fn for_client(client_name: &str, extension: &str) -> Self {
    Self {
      slug: ClientSlug::from_client_name(client_name),
      extension: extension.trim_start_matches('.').to_string(),
    }
  }

  pub fn slug(&self) -> &ClientSlug {
    &self.slug
  }

  pub fn extension(&self) -> &str {
    &self.extension
  }

  /// Same name with another extension, used by backends that emit a different format.
  pub fn with_extension(&self, extension: &str) -> Self {
    Self {
      slug: self.slug.clone(),
      extension: extension.trim_start_matches('.').to_string(),
    }
  }
}

impl fmt::Display for ExportFileName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}.{}", FILE_NAME_PREFIX, self.slug, self.extension)
  }
}

// Page Size - physical page dimensions in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
  pub width_mm: f32,
  pub height_mm: f32,
}

impl PageSize {
  pub const A4: PageSize = PageSize {
    width_mm: 210.0,
    height_mm: 297.0,
  };

  const POINTS_PER_MM: f32 = 72.0 / 25.4;

  pub fn to_points(mm: f32) -> f32 {
    mm * Self::POINTS_PER_MM
  }

  pub fn width_pt(&self) -> f32 {
    Self::to_points(self.width_mm)
  }

  pub fn height_pt(&self) -> f32 {
    Self::to_points(self.height_mm)
  }

  /// Height an image of `pixel_width` x `pixel_height` takes once stretched to the page width.
  pub fn scaled_height_mm(&self, pixel_width: u32, pixel_height: u32) -> f32 {
    if pixel_width == 0 {
      return 0.0;
    }
    pixel_height as f32 * self.width_mm / pixel_width as f32
  }
}

// Raster Scale - upscale factor applied when capturing the preview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterScale(f32);

impl RasterScale {
  pub const MAX: f32 = 8.0;

  pub fn new(value: f32) -> Result<Self, ValueObjectError> {
    if !value.is_finite() || value <= 0.0 {
      return Err(ValueObjectError::InvalidScale(format!(
        "Scale must be a positive number, got {}",
        value
      )));
    }
    if value > Self::MAX {
      return Err(ValueObjectError::InvalidScale(format!(
        "Scale cannot exceed {}, got {}",
        Self::MAX,
        value
      )));
    }
    Ok(Self(value))
  }

  pub fn value(&self) -> f32 {
    self.0
  }

  /// Pixel length of `css_pixels` after upscaling, never below one pixel.
  pub fn apply(&self, css_pixels: u32) -> u32 {
    ((css_pixels as f32 * self.0).round() as u32).max(1)
  }
}

impl Default for RasterScale {
  fn default() -> Self {
    Self(2.0)
  }
}

// Background Color - opaque fill behind the captured region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColor {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl BackgroundColor {
  pub const DARK: BackgroundColor = BackgroundColor {
    r: 0x11,
    g: 0x11,
    b: 0x11,
  };

  pub fn to_hex(&self) -> String {
    format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

impl Default for BackgroundColor {
  fn default() -> Self {
    Self::DARK
  }
}

impl FromStr for BackgroundColor {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(ValueObjectError::InvalidColor(format!(
        "Invalid hex digits in {}",
        s
      )));
    }
    let expanded: String = match hex.len() {
      3 => hex.chars().flat_map(|c| [c, c]).collect(),
      6 => hex.to_string(),
      _ => {
        return Err(ValueObjectError::InvalidColor(format!(
          "Expected #rgb or #rrggbb, got {}",
          s
        )));
      }
    };

    let channel = |range: std::ops::Range<usize>| {
      u8::from_str_radix(&expanded[range], 16)
        .map_err(|_| ValueObjectError::InvalidColor(format!("Invalid hex digits in {}", s)))
    };

    Ok(Self {
      r: channel(0..2)?,
      g: channel(2..4)?,
      b: channel(4..6)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_slug_collapses_whitespace_runs() {
    let slug = ClientSlug::from_client_name("Acme   Inc.");
    assert_eq!(slug.value(), "acme-inc.");
  }

  #[test]
  fn test_slug_handles_tabs_and_newlines() {
    let slug = ClientSlug::from_client_name("Big\t\tCorp\nLLC");
    assert_eq!(slug.value(), "big-corp-llc");
  }

  #[test]
  fn test_slug_keeps_edge_whitespace_as_hyphen() {
    let slug = ClientSlug::from_client_name("  Globex ");
    assert_eq!(slug.value(), "-globex-");
  }

  #[test]
  fn test_slug_is_lowercase_without_whitespace() {
    for name in ["Acme Inc.", "ÉCOLE  Nationale", "Mixed CASE\u{a0}Name", "x"] {
      let slug = ClientSlug::from_client_name(name);
      assert!(!slug.value().chars().any(char::is_whitespace), "{}", name);
      assert_eq!(slug.value(), slug.value().to_lowercase(), "{}", name);
      assert!(!slug.value().contains("--"), "{}", name);
    }
  }

  #[test]
  fn test_default_client_file_name_keeps_double_period() {
    let name = ExportFileName::for_client("Acme Inc.", "pdf");
    assert_eq!(name.to_string(), "invoice-acme-inc..pdf");
  }

  #[test]
  fn test_file_name_extension_swap() {
    let name = ExportFileName::for_client("Acme Inc.", ".pdf");
    assert_eq!(name.extension(), "pdf");
    assert_eq!(name.with_extension("png").to_string(), "invoice-acme-inc..png");
  }

  #[test]
  fn test_a4_scaled_height_preserves_aspect_ratio() {
    assert_eq!(PageSize::A4.scaled_height_mm(1000, 500), 105.0);
    assert_eq!(PageSize::A4.scaled_height_mm(420, 840), 420.0);
    assert_eq!(PageSize::A4.scaled_height_mm(0, 840), 0.0);
  }

  #[test]
  fn test_a4_points() {
    assert!((PageSize::A4.width_pt() - 595.28).abs() < 0.01);
    assert!((PageSize::A4.height_pt() - 841.89).abs() < 0.01);
  }

  #[test]
  fn test_raster_scale_bounds() {
    assert!(RasterScale::new(2.0).is_ok());
    assert!(RasterScale::new(0.0).is_err());
    assert!(RasterScale::new(-1.0).is_err());
    assert!(RasterScale::new(f32::NAN).is_err());
    assert!(RasterScale::new(9.0).is_err());
    assert_eq!(RasterScale::default().apply(560), 1120);
  }

  #[test]
  fn test_display_date_has_no_padding() {
    let date = NaiveDate::from_ymd_opt(2025, 5, 7).unwrap();
    assert_eq!(display_date(date), "5/7/2025");
  }

  #[test]
  fn test_background_color_parsing() {
    let color: BackgroundColor = "#111111".parse().unwrap();
    assert_eq!(color, BackgroundColor::DARK);

    let short: BackgroundColor = "#fff".parse().unwrap();
    assert_eq!(short, BackgroundColor { r: 255, g: 255, b: 255 });
    assert_eq!(short.to_hex(), "#ffffff");

    assert!("#12345".parse::<BackgroundColor>().is_err());
    assert!("#zzzzzz".parse::<BackgroundColor>().is_err());
  }

  #[test]
  fn test_background_color_rejects_signs_and_non_hex() {
    for input in ["#+f+f+f", "#+ff", "#-1-1-1", "#11 111", "#ééé"] {
      assert!(input.parse::<BackgroundColor>().is_err(), "{}", input);
    }
  }
}
