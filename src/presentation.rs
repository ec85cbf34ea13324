//! Presentation mapper: pure translation of (state, distance) into indicator
//! placement and the inline styles the component renders.

use crate::model::PullState;

/// Easing used whenever the finger is not on the screen.
pub const EASED_TRANSITION: &str = "all 0.3s cubic-bezier(0.2, 0.8, 0.2, 1)";
const BUBBLE_SHADOW: &str = "0 3px 5px -1px rgba(0,0,0,0.2), 0 6px 10px 0 rgba(0,0,0,0.14), 0 1px 18px 0 rgba(0,0,0,0.12)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleTransform {
    pub translate_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl BubbleTransform {
    pub const HIDDEN: BubbleTransform = BubbleTransform {
        translate_y: -60.0,
        scale: 0.0,
        opacity: 0.0,
    };
    pub const SETTLED: BubbleTransform = BubbleTransform {
        translate_y: 70.0,
        scale: 1.0,
        opacity: 1.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Glyph {
    Spinner,
    Arrow { rotation_deg: f64, opacity: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    pub bubble: BubbleTransform,
    pub glyph: Glyph,
    pub content_opacity: f64,
    /// False while the finger is down: changes must track it with no easing.
    pub animate: bool,
}

pub fn present(state: PullState, distance: f64, threshold: f64, dragging: bool) -> Presentation {
    let bubble = if state.is_settling() {
        BubbleTransform::SETTLED
    } else if distance > 0.0 {
        BubbleTransform {
            translate_y: (distance - 30.0).max(-10.0),
            scale: (distance / 40.0).min(1.0),
            opacity: (distance / 20.0).min(1.0),
        }
    } else {
        BubbleTransform::HIDDEN
    };

    let glyph = if state.is_settling() {
        Glyph::Spinner
    } else {
        Glyph::Arrow {
            rotation_deg: ((distance / threshold) * 360.0).min(360.0),
            opacity: (distance / 40.0).min(1.0),
        }
    };

    Presentation {
        bubble,
        glyph,
        content_opacity: if state == PullState::Refreshing { 0.5 } else { 1.0 },
        animate: !dragging,
    }
}

impl Presentation {
    pub fn bubble_style(&self, background_color: &str) -> String {
        let b = self.bubble;
        let transition = if self.animate { EASED_TRANSITION } else { "none" };
        format!(
            "transform:translate3d(-50%, {}px, 0) scale({}); opacity:{}; background-color:{}; position:absolute; left:50%; top:0; z-index:9999; border-radius:50%; box-shadow:{}; display:flex; align-items:center; justify-content:center; width:40px; height:40px; pointer-events:none; transition:{};",
            b.translate_y, b.scale, b.opacity, background_color, BUBBLE_SHADOW, transition
        )
    }

    pub fn content_style(&self) -> String {
        format!(
            "min-height:100vh; opacity:{}; transition:opacity 0.3s;",
            self.content_opacity
        )
    }
}

pub fn arrow_style(rotation_deg: f64, opacity: f64) -> String {
    format!(
        "width:24px; height:24px; transform:rotate({}deg); transition:opacity 0.2s; opacity:{};",
        rotation_deg, opacity
    )
}

pub const CONTAINER_STYLE: &str =
    "position:relative; min-height:100vh; width:100%; touch-action:pan-y; user-select:none;";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_hidden() {
        let p = present(PullState::Idle, 0.0, 80.0, false);
        assert_eq!(p.bubble, BubbleTransform::HIDDEN);
        assert_eq!(p.content_opacity, 1.0);
        assert_eq!(
            p.glyph,
            Glyph::Arrow {
                rotation_deg: 0.0,
                opacity: 0.0
            }
        );
    }

    #[test]
    fn shallow_pull_grows_in() {
        let p = present(PullState::Pulling, 10.0, 80.0, true);
        assert_eq!(p.bubble.translate_y, -10.0);
        assert_eq!(p.bubble.scale, 0.25);
        assert_eq!(p.bubble.opacity, 0.5);
        assert!(!p.animate);
    }

    #[test]
    fn pull_saturates_early() {
        let p = present(PullState::Pulling, 60.0, 80.0, true);
        assert_eq!(p.bubble.translate_y, 30.0);
        assert_eq!(p.bubble.scale, 1.0);
        assert_eq!(p.bubble.opacity, 1.0);
        assert_eq!(
            p.glyph,
            Glyph::Arrow {
                rotation_deg: 270.0,
                opacity: 1.0
            }
        );
    }

    #[test]
    fn arrow_rotation_stops_at_full_turn() {
        let p = present(PullState::Ready, 170.0, 80.0, true);
        assert_eq!(
            p.glyph,
            Glyph::Arrow {
                rotation_deg: 360.0,
                opacity: 1.0
            }
        );
        assert_eq!(p.bubble.translate_y, 140.0);
    }

    #[test]
    fn refreshing_parks_and_dims() {
        let p = present(PullState::Refreshing, 90.0, 80.0, false);
        assert_eq!(p.bubble, BubbleTransform::SETTLED);
        assert_eq!(p.glyph, Glyph::Spinner);
        assert_eq!(p.content_opacity, 0.5);
        assert!(p.animate);
    }

    #[test]
    fn complete_keeps_spinner_without_dimming() {
        let p = present(PullState::Complete, 90.0, 80.0, false);
        assert_eq!(p.bubble, BubbleTransform::SETTLED);
        assert_eq!(p.glyph, Glyph::Spinner);
        assert_eq!(p.content_opacity, 1.0);
    }

    #[test]
    fn styles_switch_easing_with_drag() {
        let dragging = present(PullState::Pulling, 40.0, 80.0, true);
        assert!(dragging.bubble_style("#fff").contains("transition:none;"));
        assert!(
            dragging
                .bubble_style("#fff")
                .contains("translate3d(-50%, 10px, 0) scale(1)")
        );

        let released = present(PullState::Idle, 0.0, 80.0, false);
        let style = released.bubble_style("#ffffff");
        assert!(style.contains(EASED_TRANSITION));
        assert!(style.contains("background-color:#ffffff"));
        assert!(style.contains("translate3d(-50%, -60px, 0) scale(0)"));
    }

    #[test]
    fn content_style_carries_dimming() {
        let p = present(PullState::Refreshing, 90.0, 80.0, false);
        assert!(p.content_style().contains("opacity:0.5;"));
        assert!(arrow_style(180.0, 0.5).contains("rotate(180deg)"));
    }
}
