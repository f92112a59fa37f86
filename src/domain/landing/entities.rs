use serde::Serialize;

use super::errors::LandingError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
  pub name: &'static str,
  pub role: &'static str,
  pub content: &'static str,
  pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
  pub icon: &'static str,
  pub title: &'static str,
  pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingTier {
  pub title: &'static str,
  pub price: &'static str,
  pub description: &'static str,
  pub features: &'static [&'static str],
  pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
  pub question: &'static str,
  pub answer: &'static str,
}

/// In-page anchor target reachable from the navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
  pub anchor: &'static str,
  pub label: &'static str,
  pub in_navbar: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
  pub heading: &'static str,
  pub links: &'static [&'static str],
}

// Testimonial Carousel - fixed ordered list plus the index being shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialCarousel {
  testimonials: Vec<Testimonial>,
  active: usize,
}

impl TestimonialCarousel {
  pub fn new(testimonials: Vec<Testimonial>) -> Self {
    Self {
      testimonials,
      active: 0,
    }
  }

  pub fn active(&self) -> usize {
    self.active
  }

  pub fn len(&self) -> usize {
    self.testimonials.len()
  }

  pub fn is_empty(&self) -> bool {
    self.testimonials.is_empty()
  }

  pub fn testimonials(&self) -> &[Testimonial] {
    &self.testimonials
  }

  pub fn current(&self) -> Option<&Testimonial> {
    self.testimonials.get(self.active)
  }

  /// Jump straight to `index`. There is no wraparound; an index past the end
  /// is rejected and the current selection stays as it was.
  pub fn select(&mut self, index: usize) -> Result<(), LandingError> {
    if index >= self.testimonials.len() {
      return Err(LandingError::TestimonialOutOfRange {
        index,
        len: self.testimonials.len(),
      });
    }
    self.active = index;
    Ok(())
  }
}
