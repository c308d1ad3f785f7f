//! Loading indicators: a block-level loader and an inline roller.

use leptos::prelude::*;

/// Centered block spinner for panel-sized loading states.
#[component]
pub fn Loader(#[prop(default = 48)] size: u32) -> impl IntoView {
    view! {
        <div class="loader" role="status" aria-live="polite" aria-busy="true">
            <div
                class="loader__ring"
                aria-hidden="true"
                style=format!("width: {size}px; height: {size}px;")
            ></div>
            <span class="loader__label">"Loading..."</span>
        </div>
    }
}

/// Small inline spinner sized to sit inside a button label.
#[component]
pub fn Roller(#[prop(default = 16)] size: u32) -> impl IntoView {
    view! {
        <span
            class="roller"
            role="status"
            aria-busy="true"
            aria-label="Working"
            style=format!("width: {size}px; height: {size}px;")
        >
            <span class="roller__dot" aria-hidden="true"></span>
        </span>
    }
}
