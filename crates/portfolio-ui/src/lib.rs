//! Portfolio UI Components
//!
//! Presentation-only Dioxus primitives shared by the page sections.
//!
//! ## Palette
//!
//! - **Teal (#14b8a6)**: Primary accent, links, active states
//! - **Ink (#0f172a)**: Headings and body copy
//! - **Mist (#f8fafc)**: Section backgrounds
//!
//! None of these components hold behaviour state; anything timed or
//! stateful comes from `portfolio-core` through the page.

pub mod components;

pub use components::*;
