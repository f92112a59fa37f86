pub mod export_invoice_pdf;
pub mod generate_invoice;
pub mod send_invoice;
pub mod update_draft_field;

pub use export_invoice_pdf::{
  ExportInvoicePdfCommand, ExportInvoicePdfResponse, ExportInvoicePdfUseCase,
};
pub use generate_invoice::{GenerateInvoiceCommand, GenerateInvoiceResponse, GenerateInvoiceUseCase};
pub use send_invoice::{SendInvoiceCommand, SendInvoiceResponse, SendInvoiceUseCase};
pub use update_draft_field::{
  UpdateDraftFieldCommand, UpdateDraftFieldResponse, UpdateDraftFieldUseCase,
};
