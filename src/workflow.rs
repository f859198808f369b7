//! Upload-and-result state machine.
//!
//! [`UploadWorkflow`] converts a user file selection into exactly one
//! network exchange and exposes the outcome as a discriminated state for
//! rendering. All state mutation funnels through the workflow instance;
//! the view layer only reads.

use leptos::*;
use std::rc::Rc;

use crate::config;
use crate::services::upload_image;
use crate::types::{MatchResult, UploadError, UploadResult};

// =============================================================================
// Preview reference
// =============================================================================

/// Revocable handle to the bytes of the selected file, used to render the
/// just-uploaded image alongside results.
///
/// Wraps a blob object URL. Clones share one underlying URL so reactive
/// reads can copy the state freely; the URL is revoked when the last
/// handle is dropped, which happens naturally when the next selection
/// replaces the `Completed` state.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewReference(Rc<PreviewUrl>);

#[derive(Debug, PartialEq)]
struct PreviewUrl {
    url: String,
}

impl PreviewReference {
    /// Create an object URL over the file's bytes.
    ///
    /// Called only after a confirmed upload success, never before.
    pub fn create(file: &web_sys::File) -> UploadResult<Self> {
        let url = web_sys::Url::create_object_url_with_blob(file).map_err(|e| {
            UploadError::Request {
                message: format!("failed to create preview URL: {:?}", e),
            }
        })?;
        Ok(Self(Rc::new(PreviewUrl { url })))
    }

    /// The object URL, usable as an `img src`.
    pub fn url(&self) -> &str {
        &self.0.url
    }

    #[cfg(test)]
    pub(crate) fn from_url(url: String) -> Self {
        Self(Rc::new(PreviewUrl { url }))
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        // Object URLs only exist in the browser; native test builds have
        // nothing to revoke.
        #[cfg(target_arch = "wasm32")]
        if let Err(e) = web_sys::Url::revoke_object_url(&self.url) {
            log::warn!("failed to revoke preview URL: {:?}", e);
        }
    }
}

// =============================================================================
// Upload state
// =============================================================================

/// The single renderable state of the upload workflow.
///
/// Exactly one variant is active at any time. `Completed` and `Failed`
/// are terminal until the next valid selection, which resets straight to
/// `Uploading`; `Idle` is only the pre-first-use state.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadState {
    /// No file has been selected yet
    Idle,
    /// One request is in flight
    Uploading,
    /// The last request succeeded
    Completed {
        /// Local preview of the uploaded file
        preview: PreviewReference,
        /// Matches in backend order
        matches: Vec<MatchResult>,
    },
    /// The last request settled with an error
    Failed { reason: UploadError },
}

impl UploadState {
    /// Whether a request is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, UploadState::Uploading)
    }

    /// Whether the last attempt reached a terminal outcome.
    pub fn is_settled(&self) -> bool {
        matches!(self, UploadState::Completed { .. } | UploadState::Failed { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, UploadState::Completed { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, UploadState::Failed { .. })
    }

    /// User-facing message for a failed attempt, if any.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            UploadState::Failed { reason } => Some(reason.to_string()),
            _ => None,
        }
    }
}

// =============================================================================
// In-flight guard
// =============================================================================

/// Scoped acquisition of the in-flight indicator.
///
/// The indicator is set on acquire and guaranteed to clear on `Drop`,
/// whether the exchange succeeded, failed, or unwound.
#[derive(Debug)]
pub struct InFlightGuard {
    cell: RwSignal<bool>,
}

impl InFlightGuard {
    fn acquire(cell: RwSignal<bool>) -> Self {
        cell.set(true);
        Self { cell }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.cell.set(false);
    }
}

// =============================================================================
// Workflow
// =============================================================================

/// Owner of the upload state cell and the only writer to it.
///
/// `Copy` so components can capture it in event closures.
#[derive(Clone, Copy)]
pub struct UploadWorkflow {
    state: RwSignal<UploadState>,
    in_flight: RwSignal<bool>,
}

impl UploadWorkflow {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(UploadState::Idle),
            in_flight: create_rw_signal(false),
        }
    }

    /// Read handle for the view layer.
    pub fn state(&self) -> ReadSignal<UploadState> {
        self.state.read_only()
    }

    /// Read handle for the in-flight indicator.
    pub fn in_flight(&self) -> ReadSignal<bool> {
        self.in_flight.read_only()
    }

    /// Synchronous head of a selection: validate the media type, refuse a
    /// double submit, then transition to `Uploading`.
    ///
    /// On success the previous preview/result has been discarded (the old
    /// object URL is revoked as the state is replaced) and the returned
    /// guard holds the in-flight indicator. On error the prior state is
    /// left untouched.
    pub fn try_begin(&self, media_type: &str) -> UploadResult<InFlightGuard> {
        if !config::is_accepted_media_type(media_type) {
            return Err(UploadError::UnsupportedType {
                media_type: media_type.to_string(),
            });
        }
        if self.in_flight.get_untracked() {
            return Err(UploadError::AlreadyUploading);
        }
        self.state.set(UploadState::Uploading);
        Ok(InFlightGuard::acquire(self.in_flight))
    }

    /// Convert a file selection into one upload exchange and settle into a
    /// terminal state. Resolves only once `Completed` or `Failed` has been
    /// reached; every error path fires a user-visible notification.
    pub async fn select_file(&self, file: web_sys::File) -> UploadResult<()> {
        let _guard = match self.try_begin(&file.type_()) {
            Ok(guard) => guard,
            Err(reason) => {
                log::warn!("selection refused: {:?}", reason);
                notify(&reason.to_string());
                return Err(reason);
            }
        };

        let outcome = upload_image(&file, config::BACKEND_URL)
            .await
            .and_then(|response| {
                // Preview only for requests that actually succeeded.
                let preview = PreviewReference::create(&file)?;
                Ok((preview, response.matches))
            });

        match outcome {
            Ok((preview, matches)) => {
                log::info!("✅ Upload complete: {} matches", matches.len());
                self.state.set(UploadState::Completed { preview, matches });
                Ok(())
            }
            Err(reason) => {
                log::error!("❌ Upload failed: {}", reason);
                notify(&reason.to_string());
                self.state.set(UploadState::Failed {
                    reason: reason.clone(),
                });
                Err(reason)
            }
        }
        // _guard drops here, clearing the in-flight indicator on every
        // exit path.
    }
}

/// Blocking user-visible notification.
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn completed_fixture() -> UploadState {
        UploadState::Completed {
            preview: PreviewReference::from_url("blob:fixture".to_string()),
            matches: vec![MatchResult {
                image: "a.png".to_string(),
                index: 0,
                distance: 0.42,
            }],
        }
    }

    #[test]
    fn test_invalid_type_leaves_state_unchanged() {
        let runtime = create_runtime();
        let workflow = UploadWorkflow::new();

        let err = workflow.try_begin("text/plain").unwrap_err();
        assert_eq!(
            err,
            UploadError::UnsupportedType {
                media_type: "text/plain".to_string()
            }
        );
        assert_eq!(workflow.state().get_untracked(), UploadState::Idle);
        assert!(!workflow.in_flight().get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_valid_selection_enters_uploading() {
        let runtime = create_runtime();
        let workflow = UploadWorkflow::new();

        let guard = workflow.try_begin("image/jpeg").unwrap();
        assert!(workflow.state().get_untracked().is_in_flight());
        assert!(workflow.in_flight().get_untracked());

        // Settlement clears the indicator exactly once, state untouched.
        drop(guard);
        assert!(!workflow.in_flight().get_untracked());
        assert!(workflow.state().get_untracked().is_in_flight());

        runtime.dispose();
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let runtime = create_runtime();
        let workflow = UploadWorkflow::new();

        let _guard = workflow.try_begin("image/png").unwrap();
        let err = workflow.try_begin("image/png").unwrap_err();
        assert_eq!(err, UploadError::AlreadyUploading);

        // The in-flight request is untouched.
        assert!(workflow.in_flight().get_untracked());
        assert_eq!(workflow.state().get_untracked(), UploadState::Uploading);

        runtime.dispose();
    }

    #[test]
    fn test_invalid_type_while_in_flight_keeps_indicator() {
        let runtime = create_runtime();
        let workflow = UploadWorkflow::new();

        let _guard = workflow.try_begin("image/png").unwrap();
        let err = workflow.try_begin("application/pdf").unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedType { .. }));
        assert!(workflow.in_flight().get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_reselection_discards_previous_result() {
        let runtime = create_runtime();
        let workflow = UploadWorkflow::new();

        workflow.state.set(completed_fixture());
        assert!(workflow.state().get_untracked().is_completed());

        // A new valid selection resets straight to Uploading; the stale
        // preview and match list are gone before the new request settles.
        let _guard = workflow.try_begin("image/jpeg").unwrap();
        assert_eq!(workflow.state().get_untracked(), UploadState::Uploading);

        runtime.dispose();
    }

    #[test]
    fn test_invalid_type_after_completion_keeps_result() {
        let runtime = create_runtime();
        let workflow = UploadWorkflow::new();

        workflow.state.set(completed_fixture());
        let _ = workflow.try_begin("image/gif").unwrap_err();
        assert!(workflow.state().get_untracked().is_completed());

        runtime.dispose();
    }

    #[test]
    fn test_guard_clears_indicator_on_unwind() {
        let runtime = create_runtime();
        let workflow = UploadWorkflow::new();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = workflow.try_begin("image/png").unwrap();
            panic!("exchange blew up");
        }));
        assert!(result.is_err());

        // No permanent stuck-loading state.
        assert!(!workflow.in_flight().get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_state_predicates() {
        assert!(!UploadState::Idle.is_settled());
        assert!(UploadState::Uploading.is_in_flight());
        assert!(completed_fixture().is_settled());

        let failed = UploadState::Failed {
            reason: UploadError::Rejected { status: 500 },
        };
        assert!(failed.is_settled());
        assert!(failed.is_failed());
        assert_eq!(
            failed.failure_message().unwrap(),
            "The server rejected the upload (HTTP 500)"
        );
    }

    #[test]
    fn test_preview_clones_share_one_url() {
        let preview = PreviewReference::from_url("blob:abc".to_string());
        let copy = preview.clone();
        assert_eq!(preview, copy);
        assert_eq!(copy.url(), "blob:abc");
    }
}
