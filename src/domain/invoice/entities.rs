use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::value_objects::ValueObjectError;

// Line Item - one row of the preview table, both columns are display text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
  pub description: String,
  pub amount: String,
}

impl LineItem {
  pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
    Self {
      description: description.into(),
      amount: amount.into(),
    }
  }
}

/// Editable scalar fields of a draft, named as they appear in form posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
  ClientName,
  ClientEmail,
  ClientAddress,
  Amount,
  DueDate,
  InvoiceNumber,
}

impl DraftField {
  pub const ALL: [DraftField; 6] = [
    DraftField::ClientName,
    DraftField::ClientEmail,
    DraftField::ClientAddress,
    DraftField::Amount,
    DraftField::DueDate,
    DraftField::InvoiceNumber,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      DraftField::ClientName => "client_name",
      DraftField::ClientEmail => "client_email",
      DraftField::ClientAddress => "client_address",
      DraftField::Amount => "amount",
      DraftField::DueDate => "due_date",
      DraftField::InvoiceNumber => "invoice_number",
    }
  }
}

impl fmt::Display for DraftField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for DraftField {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    DraftField::ALL
      .into_iter()
      .find(|field| field.as_str() == s)
      .ok_or_else(|| ValueObjectError::UnknownDraftField(s.to_string()))
  }
}

// Invoice Draft - the single in-memory invoice shown in the demo section.
//
// Every field is free-form display text. Nothing is parsed or cross-checked:
// `amount` is never compared against the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
  pub client_name: String,
  pub client_email: String,
  pub client_address: String,
  pub amount: String,
  pub due_date: String,
  pub invoice_number: String,
  pub items: Vec<LineItem>,
}

impl Default for InvoiceDraft {
  fn default() -> Self {
    Self {
      client_name: "Acme Inc.".to_string(),
      client_email: "client@example.com".to_string(),
      client_address: "123 Business St.".to_string(),
      amount: "$1,250.00".to_string(),
      due_date: "May 15, 2025".to_string(),
      invoice_number: "INV-2025-001".to_string(),
      items: vec![
        LineItem::new("Website Design", "$750.00"),
        LineItem::new("SEO Optimization", "$500.00"),
      ],
    }
  }
}

impl InvoiceDraft {
  pub fn field(&self, field: DraftField) -> &str {
    match field {
      DraftField::ClientName => &self.client_name,
      DraftField::ClientEmail => &self.client_email,
      DraftField::ClientAddress => &self.client_address,
      DraftField::Amount => &self.amount,
      DraftField::DueDate => &self.due_date,
      DraftField::InvoiceNumber => &self.invoice_number,
    }
  }

  /// Replace one field, leaving everything else untouched.
  pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
    let slot = match field {
      DraftField::ClientName => &mut self.client_name,
      DraftField::ClientEmail => &mut self.client_email,
      DraftField::ClientAddress => &mut self.client_address,
      DraftField::Amount => &mut self.amount,
      DraftField::DueDate => &mut self.due_date,
      DraftField::InvoiceNumber => &mut self.invoice_number,
    };
    *slot = value.into();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_draft_matches_sample() {
    let draft = InvoiceDraft::default();
    assert_eq!(draft.client_name, "Acme Inc.");
    assert_eq!(draft.amount, "$1,250.00");
    assert_eq!(draft.invoice_number, "INV-2025-001");
    assert_eq!(draft.items.len(), 2);
    assert_eq!(draft.items[0], LineItem::new("Website Design", "$750.00"));
    assert_eq!(draft.items[1], LineItem::new("SEO Optimization", "$500.00"));
  }

  #[test]
  fn test_set_field_only_touches_that_field() {
    for field in DraftField::ALL {
      let original = InvoiceDraft::default();
      let mut draft = original.clone();
      draft.set_field(field, "edited");

      assert_eq!(draft.field(field), "edited");
      for other in DraftField::ALL.into_iter().filter(|f| *f != field) {
        assert_eq!(draft.field(other), original.field(other), "{} changed", other);
      }
      assert_eq!(draft.items, original.items);
    }
  }

  #[test]
  fn test_amount_is_not_reconciled_with_items() {
    let mut draft = InvoiceDraft::default();
    draft.set_field(DraftField::Amount, "not a number");
    assert_eq!(draft.amount, "not a number");
    assert_eq!(draft.items[0].amount, "$750.00");
  }

  #[test]
  fn test_draft_field_parsing() {
    for field in DraftField::ALL {
      assert_eq!(field.as_str().parse::<DraftField>().unwrap(), field);
    }
    assert_eq!(
      "clientName".parse::<DraftField>(),
      Err(ValueObjectError::UnknownDraftField("clientName".to_string()))
    );
  }
}
