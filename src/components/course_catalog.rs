//! Course catalog panel: fetches one page of courses and renders cards.
//!
//! DESIGN
//! ======
//! The fetch effect keys off the catalog's reload epoch, so each epoch value
//! triggers exactly one request no matter how often the state is written.
//! Retry bumps the epoch instead of re-running ad-hoc fetch calls.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::spinner::Loader;
use crate::config::AppConfig;
use crate::state::catalog::{CatalogPhase, CatalogState};

/// Catalog section for the home page: heading, then loader, error panel, or
/// course cards depending on fetch phase.
#[component]
pub fn CourseCatalog() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let catalog = RwSignal::new(CatalogState::default());
    let fetched_epoch = RwSignal::new(None::<u32>);

    let _api_host = config.api_host.clone();
    let _window = config.catalog_window;
    Effect::new(move || {
        let epoch = catalog.with(|state| state.reload_epoch);
        if fetched_epoch.get_untracked() == Some(epoch) {
            return;
        }
        fetched_epoch.set(Some(epoch));
        catalog.update(|state| state.begin_fetch());
        #[cfg(feature = "hydrate")]
        {
            let api_host = _api_host.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_courses(&api_host, _window).await {
                    Ok(courses) => catalog.update(|state| state.resolve_courses(courses)),
                    Err(detail) => {
                        log::debug!("course catalog fetch failed: {detail}");
                        catalog.update(|state| state.reject());
                    }
                }
            });
        }
    });

    view! {
        <section class="catalog">
            <h2 class="catalog__heading">"Courses"</h2>
            {move || match catalog.with(|state| state.phase) {
                CatalogPhase::Loading => view! { <Loader /> }.into_any(),
                CatalogPhase::Failed => {
                    view! {
                        <div class="catalog__error">
                            <p class="catalog__error-text">"⚠ Something went wrong"</p>
                            <button
                                class="btn catalog__retry"
                                on:click=move |_| catalog.update(|state| state.request_reload())
                            >
                                "Reload"
                            </button>
                        </div>
                    }
                    .into_any()
                }
                CatalogPhase::Ready => {
                    view! {
                        <div class="catalog__cards">
                            {catalog
                                .with(|state| state.courses.clone())
                                .into_iter()
                                .map(|course| view! { <CourseCard course=course /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
