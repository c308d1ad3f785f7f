//! Click feedback and short-delay scheduling for UI actions.
//!
//! TRADE-OFFS
//! ==========
//! Navigation, dialog dismissal, and post-submit refresh all wait one short
//! beat so the pressed state is visible before the view changes. The pending
//! timer is owned by [`DelayedAction`] so unmounting a component drops (and
//! thereby cancels) the timer instead of firing into a dead view.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

/// Delay between a click and its deferred effect, in milliseconds.
pub const FEEDBACK_DELAY_MS: u32 = 250;

/// How long the pressed class stays on an element, in milliseconds.
pub const CLICKED_FLASH_MS: u32 = 100;

/// Class added to an element while its pressed feedback plays.
pub const CLICKED_CLASS: &str = "clicked";

/// Plays pressed feedback on an element by toggling [`CLICKED_CLASS`].
///
/// The removal timer is fire-and-forget: the class coming off late on a
/// detached element is harmless.
#[cfg(feature = "hydrate")]
pub fn show_clicked(el: &web_sys::Element) {
    let _ = el.class_list().add_1(CLICKED_CLASS);
    let el = el.clone();
    Timeout::new(CLICKED_FLASH_MS, move || {
        let _ = el.class_list().remove_1(CLICKED_CLASS);
    })
    .forget();
}

/// A single pending deferred action, cancelled on drop.
///
/// Rescheduling supersedes the previous action: at most one callback is ever
/// pending. Outside the browser the timer cannot run, so scheduling only
/// records that an action is pending.
pub struct DelayedAction {
    #[cfg(feature = "hydrate")]
    pending: Option<Timeout>,
    #[cfg(not(feature = "hydrate"))]
    pending: bool,
}

impl DelayedAction {
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { pending: None }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self { pending: false }
        }
    }

    /// Runs `callback` after [`FEEDBACK_DELAY_MS`], replacing any pending one.
    pub fn schedule(&mut self, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            self.pending = Some(Timeout::new(FEEDBACK_DELAY_MS, callback));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = callback;
            self.pending = true;
        }
    }

    /// Drops the pending action, if any, so it never fires.
    pub fn cancel(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            self.pending = None;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.pending = false;
        }
    }

    /// Whether an action has been scheduled and not yet cancelled.
    pub fn is_scheduled(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.pending.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.pending
        }
    }
}

impl Default for DelayedAction {
    fn default() -> Self {
        Self::new()
    }
}
