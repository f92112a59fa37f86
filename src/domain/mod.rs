//! Domain layer
//!
//! The invoice draft and its export capability, the landing page content with
//! its testimonial carousel, and the notifications the page shows.

pub mod invoice;
pub mod landing;
pub mod notification;

pub use notification::{Toast, ToastVariant};
