//! Hero - name, typewriter tagline, pointer parallax and calls to action.

use dioxus::prelude::*;
use portfolio_core::catalog::{HERO_PHRASES, OWNER_NAME, RESUME_URL};
use portfolio_core::TypewriterTiming;
use portfolio_ui::{ButtonVariant, LinkButton};

use super::icons::{Icon, IconKind};
use crate::context::{use_config, use_motion};
use crate::hooks::use_typewriter;

/// Parallax depth of each background blob, in pixels at the section edge.
const BLOB_DEPTHS: [f64; 3] = [20.0, -30.0, 25.0];

/// Offset for a layer `depth_px` deep, given the pointer position inside a
/// box of `size`. The pointer is normalised to -0.5..0.5 on each axis.
pub fn parallax_offset(pointer: (f64, f64), size: (f64, f64), depth_px: f64) -> (f64, f64) {
    if size.0 <= 0.0 || size.1 <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = (pointer.0 / size.0 - 0.5).clamp(-0.5, 0.5);
    let ny = (pointer.1 / size.1 - 0.5).clamp(-0.5, 0.5);
    (nx * depth_px, ny * depth_px)
}

#[component]
pub fn Hero() -> Element {
    let config = use_config();
    let motion = use_motion();
    let mut size = use_signal(|| (0.0, 0.0));
    let mut pointer = use_signal(|| None::<(f64, f64)>);

    let reduced = (motion.reduced)();
    let blob_style = |depth: f64| match pointer() {
        Some(at) if !reduced => {
            let (x, y) = parallax_offset(at, size(), depth);
            format!("transform: translate({:.1}px, {:.1}px);", x, y)
        }
        _ => String::new(),
    };
    let style_one = blob_style(BLOB_DEPTHS[0]);
    let style_two = blob_style(BLOB_DEPTHS[1]);
    let style_three = blob_style(BLOB_DEPTHS[2]);

    rsx! {
        section {
            id: "home",
            class: "hero section",
            onmounted: move |evt| async move {
                if let Ok(rect) = evt.get_client_rect().await {
                    size.set((rect.size.width, rect.size.height));
                }
            },
            onmousemove: move |evt| {
                let at = evt.element_coordinates();
                pointer.set(Some((at.x, at.y)));
            },
            onmouseleave: move |_| pointer.set(None),

            div { class: "hero-blob one", style: "{style_one}" }
            div { class: "hero-blob two", style: "{style_two}" }
            div { class: "hero-blob three", style: "{style_three}" }

            div { class: "container hero-content",
                h1 { class: "hero-title",
                    "Hi, I'm "
                    span { class: "text-gradient", "{OWNER_NAME}" }
                }

                if reduced {
                    p { class: "typewriter", "{HERO_PHRASES[0]}" }
                } else {
                    TypewriterLine { timing: config.typewriter }
                }

                p { class: "hero-lede",
                    "I craft "
                    strong { "exceptional digital experiences" }
                    " with clean, efficient code and thoughtful design principles. "
                    "Passionate about building solutions that make an impact."
                }

                div { class: "hero-actions",
                    LinkButton { href: "#projects".to_string(),
                        "View My Work"
                        Icon { kind: IconKind::ArrowRight, size: 18 }
                    }
                    LinkButton {
                        href: RESUME_URL.to_string(),
                        variant: ButtonVariant::Outline,
                        download: "resume.pdf".to_string(),
                        Icon { kind: IconKind::Download, size: 18 }
                        "Download CV"
                    }
                }
            }
        }
    }
}

/// Typed tagline. Mounted only when motion is allowed, so unmounting it
/// stops the typing and blink timers.
#[component]
fn TypewriterLine(timing: TypewriterTiming) -> Element {
    let frame = use_typewriter(HERO_PHRASES, timing);
    let frame = frame.read();

    rsx! {
        p { class: "typewriter", "aria-live": "polite",
            span { "{frame.text}" }
            span { class: if frame.cursor_visible { "cursor" } else { "cursor hidden" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_pointer_has_no_offset() {
        assert_eq!(parallax_offset((50.0, 25.0), (100.0, 50.0), 20.0), (0.0, 0.0));
    }

    #[test]
    fn edges_reach_half_depth() {
        assert_eq!(parallax_offset((100.0, 0.0), (100.0, 50.0), 20.0), (10.0, -10.0));
        assert_eq!(parallax_offset((0.0, 50.0), (100.0, 50.0), -30.0), (15.0, -15.0));
    }

    #[test]
    fn unmeasured_box_is_still() {
        assert_eq!(parallax_offset((10.0, 10.0), (0.0, 0.0), 25.0), (0.0, 0.0));
    }
}
