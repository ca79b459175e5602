//! Letter-flip plan: the per-character structure behind the link hover
//! effect.
//!
//! [`build_plan`] turns a link's text into an ordered list of [`Glyph`]s.
//! The DOM layer renders that list twice, once per [`Layer`], so the two
//! layers agree on character count and order by construction. Only structure
//! and transition timing are prepared here; the hover-driven layer swap
//! itself is the page stylesheet's job.
//!
//! Delays are computed in integer milliseconds and printed as seconds, so
//! the emitted strings are exact (`0s`, `0.025s`, `0.075s`) rather than
//! float-multiplication debris.

#[cfg(test)]
#[path = "flip_test.rs"]
mod flip_test;

use crate::consts::{BOTTOM_CHAR_CLASS, TOP_CHAR_CLASS};

/// Which of the two stacked layers a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Normal-flow layer holding the resting text.
    Top,
    /// Absolutely positioned layer revealed on hover.
    Bottom,
}

impl Layer {
    /// Class name for every span in this layer.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Top => TOP_CHAR_CLASS,
            Self::Bottom => BOTTOM_CHAR_CLASS,
        }
    }
}

/// One character of the rebuilt link, with its transition timing.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// The character this span will contain.
    pub ch: char,
    /// Full `transition` value, delay staggered by character index.
    pub transition: String,
    /// Whether the span gets the fixed spacer width instead of natural
    /// sizing.
    pub spacer: bool,
}

/// Ordered glyph list shared by both layers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlipPlan {
    /// Glyphs in original text order.
    pub glyphs: Vec<Glyph>,
}

impl FlipPlan {
    /// Number of characters in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the source text was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Build the glyph plan for a link's text.
///
/// Character positions are Unicode scalar values in original order. Space
/// characters become fixed-width spacers so word gaps survive
/// `inline-block` sizing.
#[must_use]
pub fn build_plan(text: &str, duration_ms: u32, stagger_ms: u32) -> FlipPlan {
    let glyphs = text
        .chars()
        .enumerate()
        .map(|(i, ch)| Glyph {
            ch,
            transition: transition_value(i, duration_ms, stagger_ms),
            spacer: ch == ' ',
        })
        .collect();
    FlipPlan { glyphs }
}

/// Stagger delay in seconds for the span at `index`.
#[must_use]
pub fn stagger_delay_secs(index: usize, stagger_ms: u32) -> f64 {
    millis_to_secs(index as u64 * u64::from(stagger_ms))
}

/// `transition` value for the span at `index`, e.g.
/// `transform 0.25s ease-in-out 0.075s`.
#[must_use]
pub fn transition_value(index: usize, duration_ms: u32, stagger_ms: u32) -> String {
    format!(
        "transform {}s ease-in-out {}s",
        millis_to_secs(u64::from(duration_ms)),
        stagger_delay_secs(index, stagger_ms)
    )
}

fn millis_to_secs(ms: u64) -> f64 {
    ms as f64 / 1000.0
}
