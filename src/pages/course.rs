//! Course outline page listing chapters and their lessons.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use leptos::prelude::*;

use crate::components::chapter_list::ChapterList;
use crate::net::types::{Chapter, CompletionStatus, Lesson};

/// Outline route: every chapter of the course as an expandable card.
#[component]
pub fn CourseOutlinePage() -> impl IntoView {
    // TODO: replace the built-in outline once the course outline endpoint lands.
    let chapters = sample_outline();

    view! {
        <div class="course-page">
            <h2 class="course-page__heading">"Course outline"</h2>
            <div class="course-page__chapters">
                {chapters
                    .into_iter()
                    .map(|chapter| view! { <ChapterList chapter=chapter /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn lesson(title: &str, completed: CompletionStatus) -> Lesson {
    Lesson { title: title.to_owned(), completed }
}

/// Built-in outline shown until outlines are served per course.
fn sample_outline() -> Vec<Chapter> {
    vec![
        Chapter {
            num: 1,
            name: "Getting started".to_owned(),
            completed: CompletionStatus::Finished,
            lessons: vec![
                lesson("Welcome", CompletionStatus::Finished),
                lesson("Course tour", CompletionStatus::Finished),
            ],
        },
        Chapter {
            num: 2,
            name: "Core concepts".to_owned(),
            completed: CompletionStatus::Ongoing,
            lessons: vec![
                lesson("First steps", CompletionStatus::Finished),
                lesson("Deeper waters", CompletionStatus::Ongoing),
                lesson("Practice set", CompletionStatus::Pending),
            ],
        },
        Chapter {
            num: 3,
            name: "Advanced topics".to_owned(),
            completed: CompletionStatus::Pending,
            lessons: vec![
                lesson("Capstone briefing", CompletionStatus::Pending),
                lesson("Capstone review", CompletionStatus::Pending),
            ],
        },
    ]
}
