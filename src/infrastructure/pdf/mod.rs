mod command;
mod factory;
mod image_pdf_writer;
mod raster;
mod raster_pdf_exporter;
mod wkhtmltoimage_rasterizer;
mod wkhtmltopdf_exporter;

pub use factory::ExporterFactory;
pub use image_pdf_writer::ImagePdfWriter;
pub use raster::{RegionRasterizer, encode_png, flatten_onto_background};
pub use raster_pdf_exporter::RasterPdfExporter;
pub use wkhtmltoimage_rasterizer::WkHtmlToImageRasterizer;
pub use wkhtmltopdf_exporter::WkHtmlToPdfExporter;
