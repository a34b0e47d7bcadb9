//! Portfolio Core Library
//!
//! Runtime-agnostic behaviour behind the single-page portfolio.
//!
//! ## Overview
//!
//! The page itself is presentation; everything with state lives here so it
//! can be driven by tests without a renderer:
//!
//! - **Typewriter**: cycles hero phrases character by character
//! - **Marquee**: duplicated, seamlessly looping skill rows
//! - **Scroll spy**: which section is under the nav reference line
//! - **Reveal**: one-shot "entered the viewport" latch
//! - **Contact**: form validation and submission lifecycle
//!
//! Timers are tokio tasks owned by [`TimerGuard`]s, so dropping the owner
//! cancels anything still pending.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{catalog, Typewriter, TypewriterHandle, TypewriterTiming};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let typewriter = Typewriter::new(catalog::HERO_PHRASES.iter().copied())?;
//!     let (handle, mut frames) = TypewriterHandle::spawn(typewriter, TypewriterTiming::default());
//!
//!     while frames.changed().await.is_ok() {
//!         println!("{}", frames.borrow().text);
//!     }
//!     drop(handle);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod chart;
pub mod config;
pub mod contact;
pub mod error;
pub mod logging;
pub mod marquee;
pub mod reveal;
pub mod scroll_spy;
pub mod timer;
pub mod typewriter;

// Re-exports
pub use chart::{RadarChart, RadarSeries};
pub use config::{ContactConfig, PortfolioConfig};
pub use contact::{
    ContactController, ContactField, ContactFields, ContactForm, ContactSubmitter, FormStatus,
    SimulatedSubmitter, SubmitAction,
};
pub use error::{PortfolioError, PortfolioResult, SubmitError};
pub use marquee::{Marquee, MarqueeDirection, MarqueeSpeed};
pub use reveal::RevealGate;
pub use scroll_spy::{ScrollSample, ScrollSpy, ScrollSpyConfig, SectionBounds, SpyChange};
pub use timer::TimerGuard;
pub use typewriter::{
    CursorBlink, TypePhase, Typewriter, TypewriterFrame, TypewriterHandle, TypewriterTiming,
};
