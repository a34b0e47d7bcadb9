//! Page sections and app-level widgets.
//!
//! Generic primitives (buttons, inputs, tags) live in `portfolio-ui`; the
//! components here know about the portfolio's content and hooks.

mod about;
mod contact;
mod education;
mod footer;
mod hero;
pub mod icons;
mod marquee;
mod navbar;
mod projects;
mod radar_chart;
mod reveal;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use education::EducationSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use projects::Projects;
pub use skills::Skills;
