//! Context providers for the portfolio.
//!
//! The root `App` provides the resolved config, the contact submitter and
//! the motion preference; the home page adds the scroll state once its
//! sections exist.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = use_config();
//! let scroll = use_scroll_state();
//! if (scroll.scrolled)() { /* compact nav */ }
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{ContactSubmitter, PortfolioConfig, ScrollSpy};

/// Get the configuration resolved at startup.
pub fn get_config() -> PortfolioConfig {
    crate::get_config()
}

/// Hook to access the runtime configuration.
pub fn use_config() -> PortfolioConfig {
    use_context::<PortfolioConfig>()
}

/// Hook to access the contact submission boundary.
pub fn use_submitter() -> Arc<dyn ContactSubmitter> {
    use_context::<Arc<dyn ContactSubmitter>>()
}

/// Whether animations should be suppressed.
#[derive(Clone, Copy)]
pub struct MotionPreference {
    pub reduced: Signal<bool>,
}

/// Hook to read the visitor's motion preference.
pub fn use_motion() -> MotionPreference {
    use_context::<MotionPreference>()
}

/// Scroll-driven chrome state, fed by the scroll spy.
///
/// - `active`: id of the section under the nav reference line
/// - `scrolled`: nav bar switches to its compact style
/// - `back_to_top`: footer shows the back-to-top button
/// - `spy`: the tracker itself; `None` if it could not be built
#[derive(Clone, Copy)]
pub struct ScrollState {
    pub active: Signal<String>,
    pub scrolled: Signal<bool>,
    pub back_to_top: Signal<bool>,
    pub spy: Signal<Option<ScrollSpy>>,
}

impl ScrollState {
    /// Copy the spy's view into the signals, touching only what changed.
    pub fn sync(self, spy: &ScrollSpy) {
        let Self {
            mut active,
            mut scrolled,
            mut back_to_top,
            ..
        } = self;

        if *active.peek() != spy.active() {
            active.set(spy.active().to_string());
        }
        if *scrolled.peek() != spy.is_scrolled() {
            scrolled.set(spy.is_scrolled());
        }
        if *back_to_top.peek() != spy.back_to_top_visible() {
            back_to_top.set(spy.back_to_top_visible());
        }
    }

    /// Make `id` the spy's active section right away, ahead of the next
    /// scroll sample. Unknown ids are ignored.
    pub fn select(self, id: &str) {
        let mut spy = self.spy;
        let mut guard = spy.write();
        let Some(spy) = guard.as_mut() else {
            return;
        };
        if let Err(e) = spy.set_active(id) {
            tracing::debug!(error = %e, "Ignoring nav selection");
            return;
        }
        self.sync(spy);
    }
}

/// Hook to access the scroll state from context.
pub fn use_scroll_state() -> ScrollState {
    use_context::<ScrollState>()
}
