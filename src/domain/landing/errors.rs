use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LandingError {
  #[error("Testimonial {index} does not exist (only {len} available)")]
  TestimonialOutOfRange { index: usize, len: usize },
}
