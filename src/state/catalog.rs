//! Course catalog fetch state for the home page.
//!
//! DESIGN
//! ======
//! The catalog is a small explicit machine (loading, ready, failed) driven by
//! named transitions instead of ad-hoc boolean flags, so the render path can
//! match on one phase and retries cannot interleave with stale flags.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Course;

/// Where the catalog fetch currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogPhase {
    /// A fetch is in flight; shown on first render and on every retry.
    #[default]
    Loading,
    /// The last fetch succeeded; `courses` holds the page.
    Ready,
    /// The last fetch failed; the retry panel is shown.
    Failed,
}

/// Shared catalog state for the home page.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub phase: CatalogPhase,
    /// Courses in server order; untouched while a retry is in flight.
    pub courses: Vec<Course>,
    /// Bumped by [`request_reload`](Self::request_reload); the fetch effect
    /// keys off this so each bump triggers exactly one request.
    pub reload_epoch: u32,
}

impl CatalogState {
    /// Marks a fetch as in flight.
    pub fn begin_fetch(&mut self) {
        self.phase = CatalogPhase::Loading;
    }

    /// Stores a fetched page, preserving server order.
    pub fn resolve_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
        self.phase = CatalogPhase::Ready;
    }

    /// Records a failed fetch; previously loaded courses are kept but hidden
    /// behind the retry panel.
    pub fn reject(&mut self) {
        self.phase = CatalogPhase::Failed;
    }

    /// Asks the fetch effect to run again.
    pub fn request_reload(&mut self) {
        self.reload_epoch = self.reload_epoch.wrapping_add(1);
    }
}
