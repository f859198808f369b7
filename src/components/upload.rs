//! Image upload component.
//!
//! Wires the file input to the upload workflow and shows the in-flight
//! indicator and the last failure, if any.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::workflow::UploadWorkflow;

#[component]
pub fn UploadSection(workflow: UploadWorkflow) -> impl IntoView {
    let state = workflow.state();
    let in_flight = workflow.in_flight();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                spawn_local(async move {
                    // Validation and notifications happen in the workflow.
                    let _ = workflow.select_file(file).await;
                });
            }
        }
    };

    view! {
        <div class="upload-section">
            <input
                type="file"
                id="fileInput"
                accept=".png, .jpg, .jpeg"
                style="display:none"
                disabled=move || in_flight.get()
                on:change=on_file_change
            />

            <label
                for="fileInput"
                class="upload-button"
                class:disabled=move || in_flight.get()
            >
                {move || if in_flight.get() { "Uploading..." } else { "Upload Photo" }}
            </label>

            <Show
                when=move || in_flight.get()
                fallback=|| view! { }
            >
                <div class="loader">"Searching for similar images..."</div>
            </Show>

            <Show
                when=move || state.get().is_failed()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || state.get().failure_message().unwrap_or_default()}
                </div>
            </Show>
        </div>
    }
}
