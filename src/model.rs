//! Core data models for the pull-to-refresh gesture.
//! Everything here is plain data plus the resistance curve; the DOM never leaks in.

use serde::{Deserialize, Serialize};

/// Scroll offsets at or below this still count as "at the top".
pub const SCROLL_EPSILON: f64 = 1.0;
/// Exponent of the resistance curve applied to the raw drag distance.
pub const RESISTANCE_EXPONENT: f64 = 0.8;
/// Distance past the threshold the indicator rests at while refreshing.
pub const REFRESH_HOLD_OFFSET: f64 = 10.0;
/// How long the Complete state stays on screen before resetting.
pub const COMPLETE_HOLD_MS: i32 = 400;

pub const DEFAULT_THRESHOLD: f64 = 80.0;
pub const DEFAULT_MAX_PULL: f64 = 180.0;
pub const DEFAULT_COLOR: &str = "#2563eb";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PullState {
    /// Nothing pulled; initial and terminal state.
    #[default]
    Idle,
    /// Dragging down, not yet past the threshold.
    Pulling,
    /// Dragging down past the threshold; releasing now refreshes.
    Ready,
    /// Released past the threshold, waiting on the refresh handler.
    Refreshing,
    /// Refresh succeeded; shown briefly before going back to Idle.
    Complete,
}

impl PullState {
    /// Refreshing or Complete: the indicator is parked and gestures are locked out.
    pub fn is_settling(self) -> bool {
        matches!(self, PullState::Refreshing | PullState::Complete)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullConfig {
    pub threshold: f64,
    pub max_pull: f64,
    pub color: String,
    pub background_color: String,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_pull: DEFAULT_MAX_PULL,
            color: DEFAULT_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl PullConfig {
    pub fn new(threshold: f64, max_pull: f64) -> Self {
        Self {
            threshold,
            max_pull,
            ..Default::default()
        }
        .normalized()
    }

    pub fn with_colors(mut self, color: &str, background_color: &str) -> Self {
        self.color = color.to_string();
        self.background_color = background_color.to_string();
        self
    }

    /// Threshold must be positive and finite, and the cap can never sit below it.
    pub fn normalized(mut self) -> Self {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            self.threshold = DEFAULT_THRESHOLD;
        }
        if !self.max_pull.is_finite() {
            self.max_pull = DEFAULT_MAX_PULL.max(self.threshold);
        } else if self.max_pull < self.threshold {
            self.max_pull = self.threshold;
        }
        self
    }

    /// Where the indicator rests while a refresh is running.
    pub fn hold_distance(&self) -> f64 {
        self.threshold + REFRESH_HOLD_OFFSET
    }
}

/// Resistance curve: `min(diff^0.8, max_pull)`. Non-positive input yields 0.
pub fn damped_distance(diff: f64, max_pull: f64) -> f64 {
    if diff <= 0.0 || diff.is_nan() {
        return 0.0;
    }
    diff.powf(RESISTANCE_EXPONENT).min(max_pull)
}
