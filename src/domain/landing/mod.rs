pub mod catalog;
pub mod entities;
pub mod errors;

pub use entities::{
  FaqEntry, Feature, FooterColumn, NavSection, PricingTier, Testimonial, TestimonialCarousel,
};
pub use errors::LandingError;
