use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{ContactSubmitter, SimulatedSubmitter};

use crate::context::{get_config, MotionPreference};
use crate::hooks::use_reduced_motion;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The single-page portfolio
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the resolved config, the contact submitter and
/// the motion preference, then hands over to the router.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(get_config);
    use_context_provider(|| {
        let submitter: Arc<dyn ContactSubmitter> =
            Arc::new(SimulatedSubmitter::new(config.contact.simulated_delay()));
        submitter
    });

    let reduced = use_reduced_motion(config.reduced_motion);
    use_context_provider(|| MotionPreference { reduced });

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: if reduced() { "app reduced-motion" } else { "app" },
            Router::<Route> {}
        }
    }
}
