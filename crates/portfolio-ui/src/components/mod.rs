//! Reusable UI components
//!
//! Buttons, filter pills, form fields, progress bars, section headings and
//! tags. Class names line up with the global stylesheet in the app crate.

mod button;
mod category_pills;
mod input;
mod progress_bar;
mod section_heading;
mod tag;

pub use button::*;
pub use category_pills::*;
pub use input::*;
pub use progress_bar::*;
pub use section_heading::*;
pub use tag::*;
