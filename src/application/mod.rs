//! Application layer
//!
//! One use case per visitor interaction on the landing page. Use cases build
//! the page state, apply draft edits, run the export and pick the
//! notification to show.

pub mod invoice;
pub mod landing;
