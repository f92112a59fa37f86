use crate::domain::Toast;
use crate::domain::invoice::InvoiceDraft;

#[derive(Debug)]
pub struct SendInvoiceCommand {
  pub draft: InvoiceDraft,
}

#[derive(Debug)]
pub struct SendInvoiceResponse {
  pub draft: InvoiceDraft,
  pub notification: Toast,
}

/// "Send Invoice" button of the preview. No email is delivered.
#[derive(Default)]
pub struct SendInvoiceUseCase;

impl SendInvoiceUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(&self, command: SendInvoiceCommand) -> SendInvoiceResponse {
    tracing::debug!(
      "Simulated sending of {} to {}",
      command.draft.invoice_number,
      command.draft.client_email
    );

    SendInvoiceResponse {
      draft: command.draft,
      notification: Toast::invoice_sent(),
    }
  }
}
