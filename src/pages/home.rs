//! Home page - the whole portfolio, one section after another.
//!
//! Section ids must match `catalog::NAV_SECTIONS`; the scroll spy measures
//! them by id.

use dioxus::prelude::*;

use crate::components::{About, Contact, EducationSection, Footer, Hero, Navbar, Projects, Skills};
use crate::context::use_config;
use crate::hooks::use_scroll_spy;

#[component]
pub fn Home() -> Element {
    let config = use_config();
    let scroll = use_scroll_spy(config.scroll);
    use_context_provider(|| scroll);

    rsx! {
        Navbar {}
        main {
            Hero {}
            About {}
            Projects {}
            Skills {}
            EducationSection {}
            Contact {}
        }
        Footer {}
    }
}
