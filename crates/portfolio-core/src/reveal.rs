//! One-shot reveal latch for entrance animations.

/// Flips to revealed the first time a target is visible enough, then stays
/// there for good.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealGate {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealGate {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl RevealGate {
    /// `threshold` is the visible fraction required, clamped to `[0, 1]`.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Whether the target still needs watching.
    pub fn is_observing(&self) -> bool {
        !self.revealed
    }

    /// Record a visibility ratio. Returns `true` only for the observation
    /// that performs the reveal.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.revealed {
            return false;
        }
        // A zero threshold still needs the target to be on screen at all.
        if ratio > 0.0 && ratio >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once() {
        let mut gate = RevealGate::new(0.1);
        assert!(!gate.observe(0.05));
        assert!(gate.observe(0.2));
        assert!(gate.is_revealed());
        assert!(!gate.observe(0.0));
        assert!(!gate.observe(1.0));
        assert!(gate.is_revealed());
        assert!(!gate.is_observing());
    }

    #[test]
    fn zero_threshold_needs_some_visibility() {
        let mut gate = RevealGate::new(0.0);
        assert!(!gate.observe(0.0));
        assert!(gate.observe(0.01));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealGate::new(3.0).threshold(), 1.0);
        assert_eq!(RevealGate::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealGate::new(f64::NAN).threshold(), 0.0);
    }
}
