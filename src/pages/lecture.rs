//! Lecture playback page.

use leptos::prelude::*;

/// Destination for lesson navigation. Playback UI is still to come; the
/// route exists so opening a lesson lands somewhere real.
#[component]
pub fn LecturePage() -> impl IntoView {
    view! {
        <div class="lecture-page">
            <h2 class="lecture-page__heading">"Lecture"</h2>
            <p class="lecture-page__note">
                "Open a lesson from a course outline to listen to its lecture here."
            </p>
        </div>
    }
}
