//! Home page showing the course catalog.

use leptos::prelude::*;

use crate::components::course_catalog::CourseCatalog;

/// Landing route: the student's course catalog.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <CourseCatalog />
        </div>
    }
}
