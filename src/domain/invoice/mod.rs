pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{DraftField, InvoiceDraft, LineItem};
pub use errors::{ExportError, PreviewError};
pub use ports::{CaptureTarget, ExportedDocument, InvoiceExporter, PreviewRenderer};
pub use services::{ExportOutcome, InvoiceExportService};
pub use value_objects::{
  BackgroundColor, ClientSlug, ExportFileName, FILE_NAME_PREFIX, PageSize, RasterScale,
  ValueObjectError, display_date,
};
