use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
  #[default]
  Default,
  Destructive,
}

/// Transient notification shown in the page corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
  pub title: String,
  pub description: String,
  pub variant: ToastVariant,
}

impl Toast {
  pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      description: description.into(),
      variant: ToastVariant::Default,
    }
  }

  pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      variant: ToastVariant::Destructive,
      ..Self::new(title, description)
    }
  }

  pub fn invoice_generated() -> Self {
    Self::new(
      "Invoice Generated",
      "Your invoice has been generated successfully.",
    )
  }

  pub fn invoice_sent() -> Self {
    Self::new(
      "Invoice Sent",
      "This is a demo, so no email left the page. Your invoice is ready to go.",
    )
  }

  pub fn message_sent() -> Self {
    Self::new(
      "Message Sent",
      "Thank you for your message. We'll get back to you soon.",
    )
  }

  pub fn invoice_downloaded() -> Self {
    Self::new(
      "Invoice Downloaded",
      "Your invoice has been downloaded successfully.",
    )
  }

  pub fn download_failed() -> Self {
    Self::destructive(
      "Download Failed",
      "There was an error downloading your invoice. Please try again.",
    )
  }

  pub fn is_destructive(&self) -> bool {
    self.variant == ToastVariant::Destructive
  }
}
