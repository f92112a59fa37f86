pub mod get_landing_page;
pub mod select_testimonial;
pub mod submit_contact_form;

pub use get_landing_page::{GetLandingPageCommand, GetLandingPageUseCase, LandingPageState};
pub use select_testimonial::{SelectTestimonialCommand, SelectTestimonialUseCase};
pub use submit_contact_form::{
  SubmitContactFormCommand, SubmitContactFormResponse, SubmitContactFormUseCase,
};
