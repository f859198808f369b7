//! Results component: local preview plus the similar-images grid.

use leptos::*;

use crate::types::MatchResult;
use crate::workflow::{UploadState, UploadWorkflow};

#[component]
pub fn ResultsSection(workflow: UploadWorkflow) -> impl IntoView {
    let state = workflow.state();

    let preview_url = move || match state.get() {
        UploadState::Completed { preview, .. } => Some(preview.url().to_string()),
        _ => None,
    };

    let matches = move || match state.get() {
        UploadState::Completed { matches, .. } => matches,
        _ => Vec::<MatchResult>::new(),
    };

    view! {
        <Show
            when=move || state.get().is_completed()
            fallback=|| view! { }
        >
            <div class="results-section">
                <div class="uploaded-image-container">
                    <h2 class="section-title">"Uploaded Image"</h2>
                    {move || preview_url().map(|url| view! {
                        <img class="uploaded-image" src=url alt="Uploaded"/>
                    })}
                </div>

                <div class="similar-images-container">
                    <h2 class="section-title">"Similar Images"</h2>
                    <div class="match-grid">
                        <For
                            each=move || matches().into_iter().enumerate()
                            key=|(idx, _)| *idx
                            children=move |(idx, result)| view! {
                                <div class="match-card">
                                    <img
                                        class="match-image"
                                        src=result.image.clone()
                                        alt=format!("Match {}", idx + 1)
                                    />
                                    <div class="match-info">"Index: " {result.index}</div>
                                    <div class="match-info">
                                        {format!("Distance: {:.2}", result.distance)}
                                    </div>
                                </div>
                            }
                        />
                    </div>
                </div>
            </div>
        </Show>
    }
}
