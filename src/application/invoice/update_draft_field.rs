use crate::domain::invoice::{DraftField, InvoiceDraft};

#[derive(Debug)]
pub struct UpdateDraftFieldCommand {
  pub draft: InvoiceDraft,
  pub edits: Vec<(DraftField, String)>,
}

#[derive(Debug)]
pub struct UpdateDraftFieldResponse {
  pub draft: InvoiceDraft,
}

/// Applies field edits coming from the demo form so the preview can re-render.
#[derive(Default)]
pub struct UpdateDraftFieldUseCase;

impl UpdateDraftFieldUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(&self, command: UpdateDraftFieldCommand) -> UpdateDraftFieldResponse {
    let mut draft = command.draft;
    for (field, value) in command.edits {
      draft.set_field(field, value);
    }
    UpdateDraftFieldResponse { draft }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_edit_amount_keeps_other_fields() {
    let use_case = UpdateDraftFieldUseCase::new();

    let response = use_case.execute(UpdateDraftFieldCommand {
      draft: InvoiceDraft::default(),
      edits: vec![(DraftField::Amount, "$9,999.00".to_string())],
    });

    let mut expected = InvoiceDraft::default();
    expected.amount = "$9,999.00".to_string();
    assert_eq!(response.draft, expected);
  }

  #[test]
  fn test_later_edit_of_same_field_wins() {
    let use_case = UpdateDraftFieldUseCase::new();

    let response = use_case.execute(UpdateDraftFieldCommand {
      draft: InvoiceDraft::default(),
      edits: vec![
        (DraftField::ClientName, "Globex".to_string()),
        (DraftField::ClientName, "Initech".to_string()),
      ],
    });

    assert_eq!(response.draft.client_name, "Initech");
  }

  #[test]
  fn test_no_edits_returns_draft_unchanged() {
    let use_case = UpdateDraftFieldUseCase::new();

    let response = use_case.execute(UpdateDraftFieldCommand {
      draft: InvoiceDraft::default(),
      edits: Vec::new(),
    });

    assert_eq!(response.draft, InvoiceDraft::default());
  }
}
