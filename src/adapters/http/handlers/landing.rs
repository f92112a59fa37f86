use actix_web::{HttpResponse, web};
use std::sync::Arc;

use super::{LANDING_TEMPLATE, render_landing_page, today};
use crate::adapters::http::{
  dtos::{ContactForm, LandingQuery},
  errors::ApiError,
  templates::TemplateEngine,
};
use crate::application::landing::{
  GetLandingPageCommand, GetLandingPageUseCase, SelectTestimonialCommand,
  SelectTestimonialUseCase, SubmitContactFormUseCase,
};

// GET / - Full landing page
pub async fn landing_page(
  templates: web::Data<TemplateEngine>,
  get_landing_page_use_case: web::Data<Arc<GetLandingPageUseCase>>,
  query: web::Query<LandingQuery>,
) -> Result<HttpResponse, ApiError> {
  let state = get_landing_page_use_case.execute(GetLandingPageCommand {
    testimonial: query.testimonial,
    today: today(),
    ..Default::default()
  })?;

  let context = tera::Context::from_serialize(&state)?;
  let html = templates.render(LANDING_TEMPLATE, &context)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// GET /testimonials/{index} - Carousel fragment for an indicator click
pub async fn testimonial_carousel(
  templates: web::Data<TemplateEngine>,
  select_testimonial_use_case: web::Data<Arc<SelectTestimonialUseCase>>,
  path: web::Path<usize>,
) -> Result<HttpResponse, ApiError> {
  let carousel = select_testimonial_use_case.execute(SelectTestimonialCommand {
    index: path.into_inner(),
  })?;

  let mut context = tera::Context::new();
  context.insert("carousel", &carousel);

  let html = templates.render("partials/testimonial_carousel.html.tera", &context)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// POST /contact - Contact form submission
pub async fn submit_contact(
  templates: web::Data<TemplateEngine>,
  get_landing_page_use_case: web::Data<Arc<GetLandingPageUseCase>>,
  submit_contact_form_use_case: web::Data<Arc<SubmitContactFormUseCase>>,
  form: web::Form<ContactForm>,
) -> Result<HttpResponse, ApiError> {
  let response = submit_contact_form_use_case.execute(form.into_inner().into());

  let html = render_landing_page(
    &templates,
    &get_landing_page_use_case,
    None,
    vec![response.notification],
  )?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
