//! Card component for course catalog entries.
//!
//! DESIGN
//! ======
//! The footer changes with enrollment: enrolled students see their progress
//! and last visit, everyone else sees how many students are in.

#[cfg(test)]
#[path = "course_card_test.rs"]
mod course_card_test;

use leptos::prelude::*;

use crate::net::types::Course;

/// A catalog card for one course.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let Course {
        course_title,
        course_description,
        lesson_number,
        chapter_number,
        enrolled_students,
        last_visited,
        progress,
        image_url,
        is_enrolled,
        ..
    } = course;

    let progress_width = format!("{}%", progress_percent(progress));
    let cover_alt = course_title.clone();

    view! {
        <article class="course-card" class:course-card--enrolled=is_enrolled>
            <img class="course-card__cover" src=image_url alt=cover_alt />
            <div class="course-card__body">
                <h3 class="course-card__title">{course_title}</h3>
                <p class="course-card__description">{course_description}</p>
                <p class="course-card__counts">
                    <span class="course-card__count">{format!("{chapter_number} Chapters")}</span>
                    <span class="course-card__count">{format!("{lesson_number} Lessons")}</span>
                </p>
                <Show
                    when=move || is_enrolled
                    fallback=move || {
                        view! {
                            <p class="course-card__students">
                                {format!("{enrolled_students} students enrolled")}
                            </p>
                        }
                    }
                >
                    <div class="course-card__progress" aria-label="Course progress">
                        <div class="course-card__progress-fill" style:width=progress_width.clone()></div>
                    </div>
                    <p class="course-card__visited">"Last visited " {last_visited.clone()}</p>
                </Show>
            </div>
        </article>
    }
}

/// Clamps server-reported progress to a renderable percentage.
fn progress_percent(progress: u8) -> u8 {
    progress.min(100)
}
