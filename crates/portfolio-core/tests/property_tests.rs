//! Property-based tests for the typewriter and scroll spy.

use proptest::prelude::*;
use portfolio_core::{
    ScrollSample, ScrollSpy, ScrollSpyConfig, SectionBounds, TypePhase, Typewriter,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Phrases mixing ASCII, accents and multi-byte emoji
fn phrase_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z é🚀💻]{0,12}").expect("valid regex")
}

fn phrases_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(phrase_strategy(), 1..6)
}

const IDS: [&str; 6] = ["home", "about", "projects", "skills", "education", "contact"];

fn bounds_strategy() -> impl Strategy<Value = Vec<SectionBounds>> {
    prop::collection::vec(
        (0..IDS.len(), -2000.0f64..2000.0, 0.0f64..1500.0)
            .prop_map(|(i, top, height)| SectionBounds::new(IDS[i], top, top + height)),
        0..8,
    )
}

fn sample_strategy() -> impl Strategy<Value = ScrollSample> {
    (0.0f64..5000.0, bounds_strategy())
        .prop_map(|(scroll_y, sections)| ScrollSample { scroll_y, sections })
}

// ============================================================================
// Typewriter
// ============================================================================

proptest! {
    /// The visible text is always a prefix of the current phrase.
    #[test]
    fn text_is_prefix_of_current_phrase(phrases in phrases_strategy(), steps in 0usize..400) {
        let mut tw = Typewriter::new(&phrases).unwrap();
        for _ in 0..steps {
            tw.step();
            prop_assert!(tw.shown_len() <= tw.current_len());
            prop_assert!(phrases[tw.phrase_index()].starts_with(&tw.text()));
            prop_assert_eq!(tw.text().chars().count(), tw.shown_len());
        }
    }

    /// Each step changes the length by at most one and the index only
    /// advances by one, wrapping, right after the phrase is fully deleted.
    #[test]
    fn steps_are_monotone_within_a_phase(phrases in phrases_strategy(), steps in 0usize..400) {
        let mut tw = Typewriter::new(&phrases).unwrap();
        let n = phrases.len();
        for _ in 0..steps {
            let (index, shown, phase) = (tw.phrase_index(), tw.shown_len(), tw.phase());
            tw.step();
            let delta = tw.shown_len() as isize - shown as isize;
            prop_assert!(delta.abs() <= 1);

            match phase {
                TypePhase::Typing => prop_assert!(delta >= 0),
                TypePhase::Deleting => prop_assert!(delta <= 0),
                TypePhase::Holding => prop_assert_eq!(delta, 0),
            }

            if tw.phrase_index() != index {
                prop_assert_eq!(tw.phrase_index(), (index + 1) % n);
                prop_assert_eq!(phase, TypePhase::Deleting);
                prop_assert_eq!(tw.shown_len(), 0);
                prop_assert_eq!(tw.phase(), TypePhase::Typing);
            }
        }
    }

    /// Every phrase gets its turn.
    #[test]
    fn every_phrase_is_visited(phrases in phrases_strategy()) {
        let mut tw = Typewriter::new(&phrases).unwrap();
        let mut visited = vec![false; phrases.len()];
        let budget: usize = phrases.iter().map(|p| 2 * p.chars().count() + 3).sum();
        for _ in 0..budget {
            visited[tw.phrase_index()] = true;
            tw.step();
        }
        prop_assert!(visited.iter().all(|v| *v));
    }
}

// ============================================================================
// Scroll spy
// ============================================================================

proptest! {
    /// Exactly one tracked section is active after any sequence of samples.
    #[test]
    fn exactly_one_section_active(samples in prop::collection::vec(sample_strategy(), 0..30)) {
        let mut spy = ScrollSpy::new(IDS, ScrollSpyConfig::default()).unwrap();
        for sample in &samples {
            spy.apply(sample);
            let active = IDS.iter().filter(|id| spy.is_active(id)).count();
            prop_assert_eq!(active, 1);
        }
    }

    /// The active section only changes to a section that spans the line.
    #[test]
    fn active_changes_only_to_intersecting(samples in prop::collection::vec(sample_strategy(), 0..30)) {
        let mut spy = ScrollSpy::new(IDS, ScrollSpyConfig::default()).unwrap();
        for sample in &samples {
            let before = spy.active().to_string();
            let hit = spy.intersecting(&sample.sections).map(str::to_string);
            let change = spy.apply(sample);

            match hit {
                Some(id) => prop_assert_eq!(spy.active(), id.as_str()),
                None => prop_assert_eq!(spy.active(), before.as_str()),
            }
            prop_assert_eq!(change.active.is_some(), spy.active() != before);
        }
    }

    /// Scroll flags depend only on the latest offset.
    #[test]
    fn flags_follow_offset(samples in prop::collection::vec(sample_strategy(), 1..20)) {
        let mut spy = ScrollSpy::new(IDS, ScrollSpyConfig::default()).unwrap();
        for sample in &samples {
            spy.apply(sample);
        }
        let last = samples.last().unwrap().scroll_y;
        prop_assert_eq!(spy.is_scrolled(), last > 20.0);
        prop_assert_eq!(spy.back_to_top_visible(), last > 500.0);
    }
}
