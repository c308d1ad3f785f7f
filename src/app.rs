//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::pages::{
    admin_chapter::AdminChapterPage, course::CourseOutlinePage, home::HomePage,
    lecture::LecturePage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Validates the build-time configuration, provides it as context, and sets
/// up client-side routing. A build without an API host renders a
/// configuration notice instead of the page tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match AppConfig::from_build_env() {
        Ok(config) => config,
        Err(error) => {
            return view! {
                <Stylesheet id="leptos" href="/pkg/courseroom.css"/>
                <Title text="Courseroom"/>
                <div class="config-error">
                    <h2 class="config-error__heading">"Configuration required"</h2>
                    <p class="config-error__detail">{error.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/courseroom.css"/>
        <Title text="Courseroom"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("course") view=CourseOutlinePage/>
                <Route path=StaticSegment("lecture") view=LecturePage/>
                <Route
                    path=(
                        StaticSegment("admin"),
                        StaticSegment("course"),
                        ParamSegment("course_id"),
                        StaticSegment("chapter"),
                        ParamSegment("chapter_id"),
                    )
                    view=AdminChapterPage
                />
            </Routes>
        </Router>
    }
    .into_any()
}
