//! HTTP service for uploading an image to the similarity-search backend.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::UPLOAD_PATH;
use crate::types::{UploadError, UploadResponse, UploadResult};

/// Upload an image to the backend and parse the ranked matches.
///
/// One multipart POST with a single `image` part; no other fields,
/// headers, or authentication. Any non-2xx status is a failure regardless
/// of the body, which is only read for the diagnostic log.
pub async fn upload_image(file: &File, backend_url: &str) -> UploadResult<UploadResponse> {
    let form_data = FormData::new().map_err(|e| UploadError::Request {
        message: format!("failed to create form data: {:?}", e),
    })?;

    form_data
        .append_with_blob("image", file)
        .map_err(|e| UploadError::Request {
            message: format!("failed to append image: {:?}", e),
        })?;

    let url = format!("{}{}", backend_url, UPLOAD_PATH);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| UploadError::Request {
            message: format!("failed to build request: {}", e),
        })?;

    let response = request.send().await.map_err(|e| UploadError::Transport {
        message: format!("HTTP request failed: {}", e),
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        log::error!("upload rejected ({}): {}", status, body);
        return Err(UploadError::Rejected { status });
    }

    response
        .json::<UploadResponse>()
        .await
        .map_err(|e| UploadError::Transport {
            message: format!("failed to parse response: {}", e),
        })
}
