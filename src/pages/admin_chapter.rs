//! Admin page for one chapter: identity header plus lesson creation.

#[cfg(test)]
#[path = "admin_chapter_test.rs"]
mod admin_chapter_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::lesson_form::LessonCreationForm;

/// Admin route for a chapter. Opens the lesson creation dialog on demand and
/// counts completed creations, which stands in for a chapter re-fetch until
/// chapter content is served.
#[component]
pub fn AdminChapterPage() -> impl IntoView {
    let params = use_params_map();
    let show_form = RwSignal::new(false);
    let lessons_created = RwSignal::new(0_u32);

    let course_id = move || parse_route_id(params.read().get("course_id"));
    let chapter_id = move || parse_route_id(params.read().get("chapter_id"));

    let on_close = Callback::new(move |_| show_form.set(false));
    let on_created = Callback::new(move |_| {
        lessons_created.update(|count| *count += 1);
        show_form.set(false);
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h2 class="admin-page__heading">"Chapter lessons"</h2>
                <button
                    class="btn btn--primary admin-page__new"
                    on:click=move |_| show_form.set(true)
                >
                    "+ New Lesson"
                </button>
            </header>
            <p class="admin-page__meta">
                {move || match (course_id(), chapter_id()) {
                    (Some(course), Some(chapter)) => format!("Course {course}, chapter {chapter}"),
                    _ => "Unknown chapter".to_owned(),
                }}
            </p>
            <p class="admin-page__created">
                {move || format!("{} lessons added this visit", lessons_created.get())}
            </p>
            <Show when=move || show_form.get() && course_id().is_some() && chapter_id().is_some()>
                <LessonCreationForm
                    course_id=course_id().unwrap_or_default()
                    chapter_id=chapter_id().unwrap_or_default()
                    on_close=on_close
                    on_created=on_created
                />
            </Show>
        </div>
    }
}

/// Route params arrive as strings; lesson creation needs numeric IDs.
fn parse_route_id(raw: Option<String>) -> Option<i64> {
    raw.as_deref().and_then(|value| value.parse::<i64>().ok())
}
