//! Color constants for the portfolio palette.
//!
//! Mirrors the custom properties at the top of `GLOBAL_STYLES`; use these
//! where a colour has to be computed in Rust (SVG fills, inline styles).

#![allow(dead_code)]

// === TEAL (Accent) ===
pub const TEAL_50: &str = "#f0fdfa";
pub const TEAL_100: &str = "#ccfbf1";
pub const TEAL_400: &str = "#2dd4bf";
pub const TEAL_500: &str = "#14b8a6";
pub const TEAL_600: &str = "#0d9488";
pub const TEAL_700: &str = "#0f766e";
pub const TEAL_800: &str = "#115e59";

// === INK (Text) ===
pub const INK: &str = "#0f172a";
pub const INK_SECONDARY: &str = "#475569";
pub const INK_MUTED: &str = "#94a3b8";

// === SURFACES ===
pub const WHITE: &str = "#ffffff";
pub const MIST: &str = "#f8fafc";
pub const BORDER: &str = "#e2e8f0";

// === RADAR ===
pub const RADAR_GRID: &str = "rgba(148, 163, 184, 0.35)";
pub const RADAR_LABEL: &str = "#334155";
