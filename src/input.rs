// Unifies touch and mouse input into one vertical coordinate stream
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};

pub enum PointerInput {
    Touch(TouchEvent),
    Mouse(MouseEvent),
}

impl PointerInput {
    pub fn touch(e: Event) -> Option<Self> {
        e.dyn_into::<TouchEvent>().ok().map(PointerInput::Touch)
    }

    pub fn mouse(e: Event) -> Option<Self> {
        e.dyn_into::<MouseEvent>().ok().map(PointerInput::Mouse)
    }

    /// Only touch moves can be cancelled by the browser mid-scroll; mouse moves always can.
    pub fn prevent_default(&self) {
        match self {
            PointerInput::Touch(e) => {
                if e.cancelable() {
                    e.prevent_default();
                }
            }
            PointerInput::Mouse(e) => e.prevent_default(),
        }
    }
}

/// The single place that knows the two input families apart.
pub fn position_of(input: &PointerInput) -> Option<f64> {
    match input {
        PointerInput::Touch(e) => e.touches().item(0).map(|t| t.client_y() as f64),
        PointerInput::Mouse(e) => Some(e.client_y() as f64),
    }
}

/// Page scroll wins when non-zero, otherwise the content region's own scroll.
pub fn pick_scroll_offset(page: f64, content: f64) -> f64 {
    if page != 0.0 { page } else { content }
}

pub fn scroll_offset(content: Option<&Element>) -> f64 {
    let page = web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0);
    let local = content.map(|el| el.scroll_top() as f64).unwrap_or(0.0);
    pick_scroll_offset(page, local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_scroll_takes_precedence() {
        assert_eq!(pick_scroll_offset(12.0, 0.0), 12.0);
        assert_eq!(pick_scroll_offset(12.0, 40.0), 12.0);
        assert_eq!(pick_scroll_offset(0.0, 40.0), 40.0);
        assert_eq!(pick_scroll_offset(0.0, 0.0), 0.0);
    }
}
