use crate::domain::landing::{LandingError, TestimonialCarousel, catalog};

#[derive(Debug)]
pub struct SelectTestimonialCommand {
  pub index: usize,
}

/// Indicator click in the testimonial carousel.
#[derive(Default)]
pub struct SelectTestimonialUseCase;

impl SelectTestimonialUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(
    &self,
    command: SelectTestimonialCommand,
  ) -> Result<TestimonialCarousel, LandingError> {
    let mut carousel = TestimonialCarousel::new(catalog::testimonials());
    carousel.select(command.index)?;
    Ok(carousel)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_select_each_indicator() {
    let use_case = SelectTestimonialUseCase::new();
    for index in 0..catalog::testimonials().len() {
      let carousel = use_case
        .execute(SelectTestimonialCommand { index })
        .unwrap();
      assert_eq!(carousel.active(), index);
      assert_eq!(
        carousel.current().unwrap().name,
        catalog::testimonials()[index].name
      );
    }
  }

  #[test]
  fn test_select_past_the_end() {
    let result = SelectTestimonialUseCase::new().execute(SelectTestimonialCommand { index: 3 });
    assert!(result.is_err());
  }
}
