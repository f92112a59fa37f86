use crate::domain::Toast;

#[derive(Debug, Clone, Default)]
pub struct SubmitContactFormCommand {
  pub name: String,
  pub email: String,
  pub message: String,
}

#[derive(Debug)]
pub struct SubmitContactFormResponse {
  pub notification: Toast,
}

/// Contact form submission. The message is discarded; the visitor only sees
/// the confirmation.
#[derive(Default)]
pub struct SubmitContactFormUseCase;

impl SubmitContactFormUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(&self, command: SubmitContactFormCommand) -> SubmitContactFormResponse {
    tracing::debug!(
      "Contact form submitted ({} chars), nothing is forwarded",
      command.message.chars().count()
    );

    SubmitContactFormResponse {
      notification: Toast::message_sent(),
    }
  }
}
