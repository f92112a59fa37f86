use crate::domain::Toast;
use crate::domain::invoice::InvoiceDraft;

#[derive(Debug)]
pub struct GenerateInvoiceCommand {
  pub draft: InvoiceDraft,
}

#[derive(Debug)]
pub struct GenerateInvoiceResponse {
  pub draft: InvoiceDraft,
  pub notification: Toast,
}

/// Demo form submission. Nothing is generated, stored or transmitted; the
/// visitor gets a success notification and keeps the draft they typed.
#[derive(Default)]
pub struct GenerateInvoiceUseCase;

impl GenerateInvoiceUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(&self, command: GenerateInvoiceCommand) -> GenerateInvoiceResponse {
    tracing::debug!(
      "Simulated invoice generation for {}",
      command.draft.invoice_number
    );

    GenerateInvoiceResponse {
      draft: command.draft,
      notification: Toast::invoice_generated(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::DraftField;

  #[test]
  fn test_generate_returns_success_toast_and_same_draft() {
    let mut draft = InvoiceDraft::default();
    draft.set_field(DraftField::ClientName, "Globex");

    let response = GenerateInvoiceUseCase::new().execute(GenerateInvoiceCommand {
      draft: draft.clone(),
    });

    assert_eq!(response.draft, draft);
    assert_eq!(response.notification, Toast::invoice_generated());
    assert!(!response.notification.is_destructive());
  }
}
