//! UI Components for the Lens application.
//!
//! # Layout Components
//! - [`Header`] - Page banner
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Image upload trigger with in-flight indicator
//! - [`ResultsSection`] - Uploaded-image preview and similar-images grid

mod footer;
mod header;
mod hero;
mod results;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use results::*;
pub use upload::*;
