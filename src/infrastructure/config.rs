use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::domain::invoice::{BackgroundColor, RasterScale, ValueObjectError};

// Default export settings
fn default_backend() -> ExportBackend {
  ExportBackend::Raster
}

fn default_scale() -> f32 {
  2.0
}

fn default_background() -> String {
  "#111111".to_string()
}

fn default_region_width() -> u32 {
  560
}

fn default_export_timeout() -> u64 {
  30
}

fn default_replenish_seconds() -> u64 {
  2
}

fn default_burst_size() -> u32 {
  5
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  #[serde(default)]
  pub export: ExportConfig,
  #[serde(default)]
  pub rate_limit: RateLimitConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Which backend turns the preview region into a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportBackend {
  /// Snapshot the region to a bitmap and embed it in a one-page PDF
  Raster,
  /// Let wkhtmltopdf lay the region out directly
  Wkhtmltopdf,
}

/// Invoice export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
  #[serde(default = "default_backend")]
  pub backend: ExportBackend,
  /// Upscale factor used when rasterizing the preview
  #[serde(default = "default_scale")]
  pub scale: f32,
  /// Opaque fill behind the captured region, as #rrggbb
  #[serde(default = "default_background")]
  pub background: String,
  /// CSS width of the preview region in pixels
  #[serde(default = "default_region_width")]
  pub region_width_px: u32,
  #[serde(default = "default_export_timeout")]
  pub timeout_seconds: u64,
  pub wkhtmltoimage_path: Option<String>,
  pub wkhtmltopdf_path: Option<String>,
}

impl Default for ExportConfig {
  fn default() -> Self {
    Self {
      backend: default_backend(),
      scale: default_scale(),
      background: default_background(),
      region_width_px: default_region_width(),
      timeout_seconds: default_export_timeout(),
      wkhtmltoimage_path: None,
      wkhtmltopdf_path: None,
    }
  }
}

impl ExportConfig {
  pub fn raster_scale(&self) -> Result<RasterScale, ValueObjectError> {
    RasterScale::new(self.scale)
  }

  pub fn background_color(&self) -> Result<BackgroundColor, ValueObjectError> {
    self.background.parse()
  }
}

/// Rate limiting configuration for the export endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
  #[serde(default = "default_replenish_seconds")]
  pub export_replenish_seconds: u64,
  #[serde(default = "default_burst_size")]
  pub export_burst_size: u32,
}

impl Default for RateLimitConfig {
  fn default() -> Self {
    Self {
      export_replenish_seconds: default_replenish_seconds(),
      export_burst_size: default_burst_size(),
    }
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with INVOICEAI_ prefix
  ///
  /// # Environment Variables
  ///
  /// Environment variables use the INVOICEAI_ prefix and are separated by double underscores:
  /// - `INVOICEAI_SERVER__HOST=0.0.0.0`
  /// - `INVOICEAI_SERVER__PORT=8080`
  /// - `INVOICEAI_EXPORT__BACKEND=wkhtmltopdf`
  /// - `INVOICEAI_EXPORT__SCALE=2`
  /// - `INVOICEAI_EXPORT__WKHTMLTOIMAGE_PATH=/usr/local/bin/wkhtmltoimage`
  /// - `INVOICEAI_RATE_LIMIT__EXPORT_BURST_SIZE=5`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if config/default.toml is missing, a file is not
  /// valid TOML, or a value has the wrong type.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("INVOICEAI")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_structure() {
    let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [export]
            backend = "wkhtmltopdf"
            scale = 3
            wkhtmltopdf_path = "/opt/bin/wkhtmltopdf"

            [rate_limit]
            export_burst_size = 10
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.export.backend, ExportBackend::Wkhtmltopdf);
    assert_eq!(config.export.scale, 3.0);
    assert_eq!(config.export.background, "#111111"); // default
    assert_eq!(config.export.region_width_px, 560); // default
    assert_eq!(config.export.timeout_seconds, 30); // default
    assert_eq!(
      config.export.wkhtmltopdf_path.as_deref(),
      Some("/opt/bin/wkhtmltopdf")
    );
    assert!(config.export.wkhtmltoimage_path.is_none());
    assert_eq!(config.rate_limit.export_burst_size, 10);
    assert_eq!(config.rate_limit.export_replenish_seconds, 2); // default
  }

  #[test]
  fn test_export_section_is_optional() {
    let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 3000
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.export.backend, ExportBackend::Raster);
    assert_eq!(config.export.raster_scale().unwrap(), RasterScale::default());
    assert_eq!(
      config.export.background_color().unwrap(),
      BackgroundColor::DARK
    );
  }

  #[test]
  fn test_invalid_export_values_are_reported() {
    let export = ExportConfig {
      scale: 0.0,
      background: "dark".to_string(),
      ..Default::default()
    };

    assert!(export.raster_scale().is_err());
    assert!(export.background_color().is_err());
  }

  #[test]
  fn test_shipped_default_config_parses() {
    let raw = std::fs::read_to_string("config/default.toml").expect("config/default.toml exists");
    let config: Config = toml::from_str(&raw).expect("Failed to parse config/default.toml");
    assert_eq!(config.export.backend, ExportBackend::Raster);
  }
}
