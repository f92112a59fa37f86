use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::Toast;
use crate::domain::invoice::{InvoiceDraft, display_date};
use crate::domain::landing::{
  FaqEntry, Feature, FooterColumn, LandingError, NavSection, PricingTier, TestimonialCarousel,
  catalog,
};

#[derive(Debug, Default)]
pub struct GetLandingPageCommand {
  pub draft: Option<InvoiceDraft>,
  pub testimonial: Option<usize>,
  pub toasts: Vec<Toast>,
  pub today: NaiveDate,
}

/// Page-level state container handed to the landing page template.
#[derive(Debug, Serialize)]
pub struct LandingPageState {
  pub product_name: &'static str,
  pub tagline: &'static str,
  pub nav_sections: Vec<NavSection>,
  pub features: Vec<Feature>,
  pub pricing_tiers: Vec<PricingTier>,
  pub faq: Vec<FaqEntry>,
  pub footer_columns: Vec<FooterColumn>,
  pub carousel: TestimonialCarousel,
  pub draft: InvoiceDraft,
  pub invoice_date: String,
  pub toasts: Vec<Toast>,
  pub year: i32,
}

#[derive(Default)]
pub struct GetLandingPageUseCase;

impl GetLandingPageUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(&self, command: GetLandingPageCommand) -> Result<LandingPageState, LandingError> {
    let mut carousel = TestimonialCarousel::new(catalog::testimonials());
    if let Some(index) = command.testimonial {
      carousel.select(index)?;
    }

    Ok(LandingPageState {
      product_name: catalog::PRODUCT_NAME,
      tagline: catalog::TAGLINE,
      nav_sections: catalog::nav_sections(),
      features: catalog::features(),
      pricing_tiers: catalog::pricing_tiers(),
      faq: catalog::faq(),
      footer_columns: catalog::footer_columns(),
      carousel,
      draft: command.draft.unwrap_or_default(),
      invoice_date: display_date(command.today),
      toasts: command.toasts,
      year: command.today.year(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
  }

  #[test]
  fn test_fresh_page_uses_sample_draft() {
    let state = GetLandingPageUseCase::new()
      .execute(GetLandingPageCommand {
        today: today(),
        ..Default::default()
      })
      .unwrap();

    assert_eq!(state.draft, InvoiceDraft::default());
    assert_eq!(state.carousel.active(), 0);
    assert!(state.toasts.is_empty());
    assert_eq!(state.invoice_date, "4/15/2025");
    assert_eq!(state.year, 2025);
  }

  #[test]
  fn test_page_with_preselected_testimonial() {
    let state = GetLandingPageUseCase::new()
      .execute(GetLandingPageCommand {
        testimonial: Some(2),
        today: today(),
        ..Default::default()
      })
      .unwrap();

    assert_eq!(state.carousel.active(), 2);
  }

  #[test]
  fn test_page_with_unknown_testimonial_is_rejected() {
    let result = GetLandingPageUseCase::new().execute(GetLandingPageCommand {
      testimonial: Some(42),
      today: today(),
      ..Default::default()
    });

    assert!(matches!(
      result,
      Err(LandingError::TestimonialOutOfRange { index: 42, .. })
    ));
  }
}
