//! Inline Lucide icons.

use dioxus::prelude::*;
use portfolio_core::catalog::SocialKind;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Menu,
    Close,
    ArrowUp,
    ArrowRight,
    Download,
    ExternalLink,
    Github,
    Linkedin,
    Twitter,
    Instagram,
    MapPin,
    Mail,
    Phone,
    Send,
    ChevronDown,
    Heart,
    Code,
    Sparkles,
    Award,
    GraduationCap,
    BookOpen,
}

impl IconKind {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
            IconKind::ArrowUp => &["m5 12 7-7 7 7", "M12 19V5"],
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::Download => &[
                "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4",
                "m7 10 5 5 5-5",
                "M12 15V3",
            ],
            IconKind::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            IconKind::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            IconKind::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 1 0 0-4z",
            ],
            IconKind::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            IconKind::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 1 0 0-6z",
            ],
            IconKind::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "m22 6-10 7L2 6",
            ],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            IconKind::ChevronDown => &["m6 9 6 6 6-6"],
            IconKind::Heart => &[
                "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
            ],
            IconKind::Code => &["m16 18 6-6-6-6", "m8 6-6 6 6 6"],
            IconKind::Sparkles => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3Z",
            ],
            IconKind::Award => &[
                "M12 2a6 6 0 1 0 0 12 6 6 0 1 0 0-12z",
                "M15.48 12.89 17 22l-5-3-5 3 1.52-9.11",
            ],
            IconKind::GraduationCap => &[
                "M22 10v6",
                "M2 10l10-5 10 5-10 5z",
                "M6 12v5c3 3 9 3 12 0v-5",
            ],
            IconKind::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
        }
    }
}

impl From<SocialKind> for IconKind {
    fn from(kind: SocialKind) -> Self {
        match kind {
            SocialKind::GitHub => IconKind::Github,
            SocialKind::LinkedIn => IconKind::Linkedin,
            SocialKind::Twitter => IconKind::Twitter,
            SocialKind::Instagram => IconKind::Instagram,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in kind.paths() {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_kinds_have_icons() {
        assert_eq!(IconKind::from(SocialKind::GitHub), IconKind::Github);
        assert_eq!(IconKind::from(SocialKind::Instagram), IconKind::Instagram);
        assert!(!IconKind::Menu.paths().is_empty());
    }
}
