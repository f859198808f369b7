//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload your file"</h1>
            <p class="subtitle">
                "Upload a PNG or JPEG image to find the most visually "
                "similar pictures in the catalog."
            </p>
        </div>
    }
}
