//! Page-tunable configuration with hard-coded defaults.
//!
//! The page may embed a JSON island
//! (`<script type="application/json" id="sheen-config">`) overriding any
//! subset of the numeric tunables. An absent island means defaults; an
//! invalid one is reported by the DOM layer and also falls back to
//! defaults, so a bad config can only ever cost the override, never the
//! effects.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use thiserror::Error;

use crate::consts::{
    DEFAULT_FLIP_DURATION_MS, DEFAULT_FLIP_STAGGER_MS, DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
    DEFAULT_REVEAL_DURATION_MS, DEFAULT_REVEAL_OFFSET_PX, DEFAULT_REVEAL_THRESHOLD,
    DEFAULT_SWEEP_PERIOD_MS, DEFAULT_SWEEP_WINDOW_MS,
};
use crate::suppress::SweepBudget;

/// Config island parse or validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The island's text was not valid JSON for the config shape.
    #[error("failed to parse enhancement config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `reveal_threshold` must be an intersection ratio.
    #[error("reveal threshold {0} is outside 0.0..=1.0")]
    ThresholdOutOfRange(f64),
    /// `sweep_period_ms` must be nonzero.
    #[error("sweep period must be at least 1ms")]
    ZeroSweepPeriod,
    /// `sweep_window_ms` must fit at least one period.
    #[error("sweep window {window_ms}ms is shorter than one {period_ms}ms period")]
    WindowTooShort {
        /// Configured window.
        window_ms: u32,
        /// Configured period.
        period_ms: u32,
    },
}

/// Numeric tunables for the five effects.
///
/// Every field defaults to the value the site shipped with, so an absent
/// island changes nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Intersection ratio that qualifies as entering the viewport.
    pub reveal_threshold: f64,
    /// How far the observation region is pulled up from the viewport
    /// bottom, in px.
    pub reveal_bottom_margin_px: u32,
    /// Hidden-state downward offset, in px.
    pub reveal_offset_px: u32,
    /// Reveal transition duration, in ms.
    pub reveal_duration_ms: u32,
    /// Flip span transform duration, in ms.
    pub flip_duration_ms: u32,
    /// Flip per-character delay step, in ms.
    pub flip_stagger_ms: u32,
    /// Logo sweep interval, in ms.
    pub sweep_period_ms: u32,
    /// Logo sweep window, in ms.
    pub sweep_window_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin_px: DEFAULT_REVEAL_BOTTOM_MARGIN_PX,
            reveal_offset_px: DEFAULT_REVEAL_OFFSET_PX,
            reveal_duration_ms: DEFAULT_REVEAL_DURATION_MS,
            flip_duration_ms: DEFAULT_FLIP_DURATION_MS,
            flip_stagger_ms: DEFAULT_FLIP_STAGGER_MS,
            sweep_period_ms: DEFAULT_SWEEP_PERIOD_MS,
            sweep_window_ms: DEFAULT_SWEEP_WINDOW_MS,
        }
    }
}

impl Config {
    /// Parse and validate a config island's JSON text.
    ///
    /// Unknown fields are ignored; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid JSON for this shape
    /// or a value is out of range.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validated()
    }

    /// Range-check every field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first out-of-range value.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.reveal_threshold));
        }
        if self.sweep_period_ms == 0 {
            return Err(ConfigError::ZeroSweepPeriod);
        }
        if self.sweep_window_ms < self.sweep_period_ms {
            return Err(ConfigError::WindowTooShort {
                window_ms: self.sweep_window_ms,
                period_ms: self.sweep_period_ms,
            });
        }
        Ok(self)
    }

    /// Root margin string for the intersection observer.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin_px)
    }

    /// Sweep schedule for the logo suppressor.
    #[must_use]
    pub fn sweep_budget(&self) -> SweepBudget {
        SweepBudget::new(self.sweep_period_ms, self.sweep_window_ms)
    }
}
