//! Expandable chapter cards with completion-gated lesson navigation.
//!
//! DESIGN
//! ======
//! Chapters collapse to a single header row; lessons mount only while a
//! chapter is open. Opening a lesson is deferred one feedback beat and goes
//! through a liveness flag, so a row that unmounts first never navigates.

#[cfg(test)]
#[path = "chapter_list_test.rs"]
mod chapter_list_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::net::types::{Chapter, CompletionStatus, Lesson};
#[cfg(feature = "hydrate")]
use crate::util::feedback::{DelayedAction, show_clicked};

/// One chapter as a collapsible card: title, completion badge, and a
/// lesson-count row that toggles the lesson list.
#[component]
pub fn ChapterList(chapter: Chapter) -> impl IntoView {
    let Chapter { num, name, completed, lessons } = chapter;
    let show_lessons = RwSignal::new(false);
    let lesson_count = lessons.len();

    view! {
        <section class="chapter-card">
            {completion_badge(completed).map(badge_view)}
            <h3 class="chapter-card__name">{format!("{num}. ")}{name}</h3>
            <button
                class="chapter-card__toggle"
                on:click=move |_| show_lessons.update(|open| *open = toggled(*open))
            >
                <span class="chapter-card__meta">{format!("{lesson_count} Lessons")}</span>
                <span class="chapter-card__arrow" aria-hidden="true">
                    {move || if show_lessons.get() { "▴" } else { "▾" }}
                </span>
            </button>
            <Show when=move || show_lessons.get()>
                <ul class="chapter-card__lessons">
                    {lessons
                        .iter()
                        .map(|lesson| view! { <LessonRow lesson=lesson.clone() /> })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </section>
    }
}

/// A single lesson row. Clicking a navigable lesson plays pressed feedback,
/// then opens the lecture route; locked lessons only log.
#[component]
fn LessonRow(lesson: Lesson) -> impl IntoView {
    let _config = expect_context::<AppConfig>();
    let row_ref = NodeRef::<leptos::html::Li>::new();
    let status = lesson.completed;
    let row_class = format!("lesson-row lesson-row--{}", status_class_suffix(status));

    let on_open = {
        #[cfg(feature = "hydrate")]
        {
            let navigate = use_navigate();
            let title = lesson.title.clone();
            let lecture_route = _config.lecture_route.clone();
            let nav_delay = Rc::new(RefCell::new(DelayedAction::new()));
            let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
            {
                let alive = alive.clone();
                on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
            }
            move |_: leptos::ev::MouseEvent| {
                match lesson_destination(status, &lecture_route) {
                    None => {
                        log::debug!("lesson '{title}' is locked until earlier content is done");
                    }
                    Some(destination) => {
                        if let Some(row) = row_ref.get() {
                            show_clicked(&row);
                        }
                        let navigate = navigate.clone();
                        let alive = alive.clone();
                        nav_delay.borrow_mut().schedule(move || {
                            if alive.load(std::sync::atomic::Ordering::Relaxed) {
                                navigate(&destination, NavigateOptions::default());
                            }
                        });
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <li class=row_class node_ref=row_ref on:click=on_open>
            <span class="lesson-row__dot" aria-hidden="true"></span>
            <span class="lesson-row__title">{lesson.title}</span>
        </li>
    }
}

/// Corner badge shown on a chapter card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CompletionBadge {
    /// Checkmark for finished chapters.
    Check,
    /// Solid dot marking the chapter currently in progress.
    Dot,
}

/// Maps completion to its badge; pending chapters show none.
fn completion_badge(status: CompletionStatus) -> Option<CompletionBadge> {
    match status {
        CompletionStatus::Finished => Some(CompletionBadge::Check),
        CompletionStatus::Ongoing => Some(CompletionBadge::Dot),
        CompletionStatus::Pending => None,
    }
}

fn badge_view(badge: CompletionBadge) -> impl IntoView {
    match badge {
        CompletionBadge::Check => view! {
            <span class="completion-badge completion-badge--check" aria-label="Finished">"✓"</span>
        }
        .into_any(),
        CompletionBadge::Dot => view! {
            <span class="completion-badge completion-badge--dot" aria-label="In progress"></span>
        }
        .into_any(),
    }
}

/// BEM modifier suffix for a completion state.
fn status_class_suffix(status: CompletionStatus) -> &'static str {
    match status {
        CompletionStatus::Finished => "finished",
        CompletionStatus::Ongoing => "ongoing",
        CompletionStatus::Pending => "pending",
    }
}

/// Where a lesson click goes: the lecture route, or nowhere when locked.
fn lesson_destination(status: CompletionStatus, lecture_route: &str) -> Option<String> {
    status.is_navigable().then(|| lecture_route.to_owned())
}

fn toggled(open: bool) -> bool {
    !open
}
