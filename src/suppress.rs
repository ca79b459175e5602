//! Sweep scheduling for the embed logo suppressor.
//!
//! The third-party viewer re-attaches its branding node asynchronously, so
//! removal runs as repeated sweeps: once per period until a fixed window
//! closes, then never again. [`SweepBudget`] carries that schedule;
//! [`SweepOutcome`] reports what a single sweep accomplished so the DOM
//! layer can log it.

#[cfg(test)]
#[path = "suppress_test.rs"]
mod suppress_test;

use crate::consts::{DEFAULT_SWEEP_PERIOD_MS, DEFAULT_SWEEP_WINDOW_MS};

/// Timing for the bounded sweep schedule.
///
/// Values are range-checked by [`crate::config::Config`]; this type only
/// pairs them and answers schedule questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepBudget {
    period_ms: u32,
    window_ms: u32,
}

impl SweepBudget {
    /// Pair a sweep period with its total window.
    #[must_use]
    pub fn new(period_ms: u32, window_ms: u32) -> Self {
        Self { period_ms, window_ms }
    }

    /// Interval between scheduled sweeps.
    #[must_use]
    pub fn period_ms(self) -> u32 {
        self.period_ms
    }

    /// Deadline after which no sweep may run.
    #[must_use]
    pub fn window_ms(self) -> u32 {
        self.window_ms
    }

    /// How many interval sweeps fit inside the window.
    #[must_use]
    pub fn scheduled_sweeps(self) -> u32 {
        if self.period_ms == 0 {
            0
        } else {
            self.window_ms / self.period_ms
        }
    }
}

impl Default for SweepBudget {
    fn default() -> Self {
        Self::new(DEFAULT_SWEEP_PERIOD_MS, DEFAULT_SWEEP_WINDOW_MS)
    }
}

/// What one sweep against the embed's shadow root accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// The embed has not attached its shadow root yet.
    NoShadowRoot,
    /// The branding node was found and removed.
    LogoRemoved,
    /// Nothing to remove; the guard style is in place.
    Clean,
}
