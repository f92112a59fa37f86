use serde::{Deserialize, Serialize};

use crate::application::landing::SubmitContactFormCommand;
use crate::domain::invoice::DraftField;

/// Demo form post. Every field is optional; whatever is missing keeps the
/// sample value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftForm {
  pub client_name: Option<String>,
  pub client_email: Option<String>,
  pub client_address: Option<String>,
  pub amount: Option<String>,
  pub due_date: Option<String>,
  pub invoice_number: Option<String>,
}

impl DraftForm {
  /// The fields that were actually posted, as draft edits.
  pub fn into_edits(self) -> Vec<(DraftField, String)> {
    [
      (DraftField::ClientName, self.client_name),
      (DraftField::ClientEmail, self.client_email),
      (DraftField::ClientAddress, self.client_address),
      (DraftField::Amount, self.amount),
      (DraftField::DueDate, self.due_date),
      (DraftField::InvoiceNumber, self.invoice_number),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|v| (field, v)))
    .collect()
  }
}

/// Query string of the landing page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LandingQuery {
  /// Testimonial to show instead of the first one
  pub testimonial: Option<usize>,
}

/// Contact section form post
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub message: String,
}

impl From<ContactForm> for SubmitContactFormCommand {
  fn from(form: ContactForm) -> Self {
    Self {
      name: form.name,
      email: form.email,
      message: form.message,
    }
  }
}

/// Standard error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}
