// Gesture session tracked between a start and an end event
use crate::model::SCROLL_EPSILON;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    pub start_y: f64,
    pub last_y: f64,
}

impl GestureSession {
    pub fn begin(y: f64) -> Self {
        Self {
            start_y: y,
            last_y: y,
        }
    }

    /// Records `y` and returns the raw displacement since the start (positive = downward).
    pub fn track(&mut self, y: f64) -> f64 {
        self.last_y = y;
        y - self.start_y
    }
}

/// Pulling is only honoured while the content is scrolled to the very top.
pub fn at_top(scroll_offset: f64) -> bool {
    scroll_offset <= SCROLL_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_measures_from_start() {
        let mut s = GestureSession::begin(100.0);
        assert_eq!(s.track(130.0), 30.0);
        assert_eq!(s.track(90.0), -10.0);
        assert_eq!(s.last_y, 90.0);
        assert_eq!(s.start_y, 100.0);
    }

    #[test]
    fn scroll_gate_allows_sub_pixel_offsets() {
        assert!(at_top(0.0));
        assert!(at_top(1.0));
        assert!(!at_top(1.5));
        assert!(!at_top(5.0));
    }
}
