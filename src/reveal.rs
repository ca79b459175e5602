//! Reveal lifecycle: one-shot visibility for scroll-observed elements.
//!
//! Each watched element moves through [`RevealPhase`] exactly once:
//! `Unobserved` when selected, `Observing` once handed to the intersection
//! observer, `Visible` on its first qualifying intersection. `Visible` is
//! terminal; an element never re-hides and is never watched again.
//!
//! [`RevealRoster`] tracks every enrolled element by index. The DOM layer
//! stores that index on the element in a data attribute and asks the roster
//! before applying the visible state, so the transition fires at most once
//! even if the observer delivers a duplicate entry.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::Config;
use crate::consts::VISIBLE_CLASS;

/// Phase of one revealable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// Selected but not yet handed to the observer.
    #[default]
    Unobserved,
    /// Waiting for its first qualifying intersection.
    Observing,
    /// Revealed. Terminal.
    Visible,
}

impl RevealPhase {
    /// Move `Unobserved` to `Observing`. Returns whether the move happened.
    pub fn observe(&mut self) -> bool {
        if *self == Self::Unobserved {
            *self = Self::Observing;
            true
        } else {
            false
        }
    }

    /// Move `Observing` to `Visible`. Returns whether the move happened.
    pub fn reveal(&mut self) -> bool {
        if *self == Self::Observing {
            *self = Self::Visible;
            true
        } else {
            false
        }
    }
}

/// Reveal state for every enrolled element, indexed by enrollment order.
#[derive(Debug, Clone, Default)]
pub struct RevealRoster {
    phases: Vec<RevealPhase>,
}

impl RevealRoster {
    /// Empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enroll one element and start observing it. Returns its index.
    pub fn enroll(&mut self) -> usize {
        let index = self.phases.len();
        let mut phase = RevealPhase::default();
        phase.observe();
        self.phases.push(phase);
        index
    }

    /// Record the first qualifying intersection for `index`.
    ///
    /// Returns `true` exactly once per enrolled element; repeated calls and
    /// out-of-range indices return `false`.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.phases.get_mut(index) {
            Some(phase) => phase.reveal(),
            None => false,
        }
    }

    /// Phase of the element at `index`, if enrolled.
    #[must_use]
    pub fn phase(&self, index: usize) -> Option<RevealPhase> {
        self.phases.get(index).copied()
    }

    /// Number of enrolled elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Whether nothing is enrolled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// How many elements are still waiting on their first intersection.
    #[must_use]
    pub fn observing_count(&self) -> usize {
        self.phases
            .iter()
            .filter(|phase| **phase == RevealPhase::Observing)
            .count()
    }

    /// How many elements have revealed.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.phases
            .iter()
            .filter(|phase| **phase == RevealPhase::Visible)
            .count()
    }
}

/// Inline styles that hide an element until its reveal fires.
///
/// Opacity and offset start at the hidden values with the transition
/// pre-armed, so adding the visible class is all the observer callback has
/// to do.
#[must_use]
pub fn pre_arm_styles(config: &Config) -> [(&'static str, String); 3] {
    let secs = f64::from(config.reveal_duration_ms) / 1000.0;
    [
        ("opacity", "0".to_owned()),
        ("transform", format!("translateY({}px)", config.reveal_offset_px)),
        (
            "transition",
            format!("opacity {secs}s ease-out, transform {secs}s ease-out"),
        ),
    ]
}

/// Stylesheet rule for the visible state, appended to `<head>` once at
/// install time.
#[must_use]
pub fn visible_rule() -> String {
    format!(".{VISIBLE_CLASS} {{ opacity: 1 !important; transform: translateY(0) !important; }}")
}
