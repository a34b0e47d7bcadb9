//! Hooks bridging the page to the behaviour in `portfolio-core`.
//!
//! ```text
//!   webview (document::eval)              portfolio-core               view
//!   ────────────────────────              ──────────────               ────
//!   scroll/resize listener ─ScrollSample─▶ throttle_latest ▶ ScrollSpy ─▶ ScrollState
//!   IntersectionObserver ───ratio────────▶ RevealGate ────────────────▶ visible
//!   matchMedia ─────────────bool─────────▶ ──────────────────────────▶ reduced motion
//!                                          TypewriterHandle ──watch───▶ frame
//!                                          ContactController ─watch───▶ form
//! ```
//!
//! Every bridge runs in a `use_future` task owned by the calling component,
//! so unmounting the component drops the task together with whatever core
//! handle it holds, and that cancels the handle's timers.

use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::scroll_spy::throttle_latest;
use portfolio_core::{
    catalog, ContactController, ContactForm, RevealGate, ScrollSample, ScrollSpy,
    ScrollSpyConfig, Typewriter, TypewriterFrame, TypewriterHandle, TypewriterTiming,
};

use crate::context::{use_motion, use_submitter, ScrollState};

const REDUCED_MOTION_PROBE: &str = r#"
const query = window.matchMedia("(prefers-reduced-motion: reduce)");
dioxus.send(query.matches);
query.addEventListener("change", (event) => dioxus.send(event.matches));
await new Promise(() => {});
"#;

fn scroll_probe_script(ids: &[&str]) -> String {
    let ids = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
const ids = {ids};
const report = () => {{
  const sections = [];
  for (const id of ids) {{
    const el = document.getElementById(id);
    if (!el) continue;
    const rect = el.getBoundingClientRect();
    sections.push({{ id, top: rect.top, bottom: rect.bottom }});
  }}
  dioxus.send({{ scroll_y: window.scrollY, sections }});
}};
if (window.__portfolioScrollProbe) {{
  window.removeEventListener("scroll", window.__portfolioScrollProbe);
  window.removeEventListener("resize", window.__portfolioScrollProbe);
}}
window.__portfolioScrollProbe = report;
window.addEventListener("scroll", report, {{ passive: true }});
window.addEventListener("resize", report);
report();
await new Promise(() => {{}});
"#
    )
}

fn intersection_probe_script(id: &str, threshold: f64) -> String {
    let id = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
const id = {id};
let el = document.getElementById(id);
while (!el) {{
  await new Promise((resolve) => requestAnimationFrame(resolve));
  el = document.getElementById(id);
}}
const observer = new IntersectionObserver((entries) => {{
  for (const entry of entries) {{
    dioxus.send(entry.isIntersecting ? entry.intersectionRatio : 0);
  }}
}}, {{ threshold: [0, {threshold}] }});
observer.observe(el);
await dioxus.recv();
observer.disconnect();
"#
    )
}

/// Scroll the element with `id` into view.
pub fn scroll_to_section(id: &str) {
    let id = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
    document::eval(&format!(
        r#"document.getElementById({id})?.scrollIntoView({{ behavior: "smooth", block: "start" }});"#
    ));
}

/// Scroll back to the top of the page.
pub fn scroll_to_top() {
    document::eval(r#"window.scrollTo({ top: 0, behavior: "smooth" });"#);
}

/// Track the nav sections and expose the result as [`ScrollState`].
pub fn use_scroll_spy(config: ScrollSpyConfig) -> ScrollState {
    let active = use_signal(|| catalog::NAV_SECTIONS[0].id.to_string());
    let scrolled = use_signal(|| false);
    let back_to_top = use_signal(|| false);
    let spy = use_signal(|| match ScrollSpy::new(catalog::section_ids(), config) {
        Ok(spy) => Some(spy),
        Err(e) => {
            tracing::error!(error = %e, "Scroll spy disabled");
            None
        }
    });
    let state = ScrollState {
        active,
        scrolled,
        back_to_top,
        spy,
    };

    use_future(move || async move {
        if state.spy.peek().is_none() {
            return;
        }
        let ids: Vec<&str> = catalog::section_ids().collect();

        let probe = document::eval(&scroll_probe_script(&ids));
        let samples = futures::stream::unfold(probe, |mut probe| async move {
            match probe.recv::<ScrollSample>().await {
                Ok(sample) => Some((sample, probe)),
                Err(e) => {
                    tracing::warn!(error = ?e, "Scroll probe closed");
                    None
                }
            }
        });

        throttle_latest(Box::pin(samples), config.throttle(), move |sample| {
            let mut spy = state.spy;
            if let Some(spy) = spy.write().as_mut() {
                spy.apply(&sample);
                state.sync(spy);
            };
        })
        .await;
    });

    state
}

static NEXT_REVEAL_ID: AtomicUsize = AtomicUsize::new(0);

/// One-shot entrance reveal.
///
/// Returns the DOM id the caller must put on the observed element and a
/// signal that flips to `true` once, when enough of it is visible. With
/// reduced motion the content is visible from the start.
pub fn use_reveal(threshold: f64) -> (String, Signal<bool>) {
    let id = use_hook(|| format!("reveal-{}", NEXT_REVEAL_ID.fetch_add(1, Ordering::Relaxed)));
    let motion = use_motion();
    let mut visible = use_signal(|| *motion.reduced.peek());

    let probe_id = id.clone();
    use_future(move || {
        let probe_id = probe_id.clone();
        async move {
            if *visible.peek() {
                return;
            }
            let mut gate = RevealGate::new(threshold);
            let mut probe = document::eval(&intersection_probe_script(&probe_id, gate.threshold()));

            while gate.is_observing() {
                match probe.recv::<f64>().await {
                    Ok(ratio) => {
                        if gate.observe(ratio) {
                            tracing::debug!(target_id = %probe_id, ratio, "Revealed");
                            visible.set(true);
                        }
                    }
                    Err(e) => {
                        // Never leave content hidden because the probe died.
                        tracing::warn!(error = ?e, target_id = %probe_id, "Reveal probe failed");
                        visible.set(true);
                        return;
                    }
                }
            }

            if let Err(e) = probe.send(true) {
                tracing::debug!(error = ?e, target_id = %probe_id, "Reveal observer already gone");
            }
        }
    });

    (id, visible)
}

/// Follow the system reduced-motion preference, or force it on.
pub fn use_reduced_motion(forced: bool) -> Signal<bool> {
    let mut reduced = use_signal(|| forced);

    use_future(move || async move {
        if forced {
            return;
        }
        let mut probe = document::eval(REDUCED_MOTION_PROBE);
        while let Ok(prefers) = probe.recv::<bool>().await {
            tracing::debug!(prefers, "Reduced-motion preference");
            reduced.set(prefers);
        }
    });

    reduced
}

/// Run the hero typewriter while the calling component is mounted.
pub fn use_typewriter(
    phrases: &'static [&'static str],
    timing: TypewriterTiming,
) -> Signal<TypewriterFrame> {
    let mut frame = use_signal(|| TypewriterFrame {
        cursor_visible: true,
        ..TypewriterFrame::default()
    });

    use_future(move || async move {
        let typewriter = match Typewriter::new(phrases.iter().copied()) {
            Ok(typewriter) => typewriter,
            Err(e) => {
                tracing::error!(error = %e, "Typewriter disabled");
                return;
            }
        };

        // Dropped with this task, which stops both timers.
        let (_handle, mut frames) = TypewriterHandle::spawn(typewriter, timing);
        while frames.changed().await.is_ok() {
            frame.set(frames.borrow_and_update().clone());
        }
    });

    frame
}

/// Contact form state bound to a controller owned by the calling component.
pub fn use_contact_form(dismiss_after: Duration) -> (Rc<ContactController>, Signal<ContactForm>) {
    let submitter = use_submitter();
    let controller = use_hook(|| Rc::new(ContactController::new(submitter, dismiss_after)));
    let updates = use_hook(|| controller.subscribe());
    let mut form = use_signal(ContactForm::new);

    use_future(move || {
        let mut updates = updates.clone();
        async move {
            while updates.changed().await.is_ok() {
                form.set(updates.borrow_and_update().clone());
            }
        }
    });

    (controller, form)
}
