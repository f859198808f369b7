//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// One similarity match returned by the backend.
///
/// The match list is rendered in the order the backend delivered it; the
/// client never re-sorts by distance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Image reference (URL or data URL)
    pub image: String,
    /// Index of the match in the backend's catalog
    pub index: u32,
    /// Distance score; lower means more similar by backend convention
    pub distance: f64,
}

/// Response from the backend upload endpoint.
///
/// Unknown fields (e.g. the backend's `uploaded_image` echo) are ignored;
/// the preview is rendered from the local file, not from the response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Ranked matches, most similar first
    pub matches: Vec<MatchResult>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend upload errors.
///
/// One variant per failure class; every variant is terminal for the
/// current upload attempt and is never retried automatically.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadError {
    /// Selected file's media type is not PNG/JPEG. Handled locally,
    /// never reaches the network layer.
    UnsupportedType {
        /// The declared media type, kept for diagnostics
        media_type: String,
    },
    /// A selection arrived while another upload was still in flight.
    AlreadyUploading,
    /// The request body or the preview reference could not be built.
    Request { message: String },
    /// The exchange could not be completed (network failure, malformed
    /// response).
    Transport { message: String },
    /// HTTP response received with a non-success status. The status is
    /// retained for diagnostics but not shown to the user.
    Rejected { status: u16 },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::UnsupportedType { .. } => {
                write!(f, "Only PNG or JPEG files are accepted")
            }
            UploadError::AlreadyUploading => {
                write!(f, "An upload is already in progress")
            }
            UploadError::Request { message } => {
                write!(f, "Could not prepare the upload: {}", message)
            }
            UploadError::Transport { message } => {
                write!(f, "Upload failed: {}", message)
            }
            UploadError::Rejected { status } => {
                write!(f, "The server rejected the upload (HTTP {})", status)
            }
        }
    }
}

impl std::error::Error for UploadError {}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
