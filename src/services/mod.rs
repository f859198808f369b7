//! Backend communication services.
//!
//! # Services
//!
//! - [`upload`] - image upload to the similarity-search backend

pub mod upload;

pub use upload::*;
