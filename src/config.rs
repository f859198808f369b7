//! Application configuration.
//!
//! Centralized configuration for the Lens frontend. In development these
//! are hardcoded; in production they could be loaded from environment or
//! a config file.

/// Backend API base URL.
///
/// The similarity-search backend server.
pub const BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Upload endpoint path, appended to [`BACKEND_URL`].
pub const UPLOAD_PATH: &str = "/upload";

/// Media types accepted for upload.
///
/// Anything else is refused client-side before a request is issued.
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// Application name, shown in the page header.
pub const APP_NAME: &str = "Lens";

/// Whether a declared media type is accepted for upload.
pub fn is_accepted_media_type(media_type: &str) -> bool {
    ACCEPTED_IMAGE_TYPES.contains(&media_type)
}
