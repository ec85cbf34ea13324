use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement};
use yew::prelude::*;

use super::icons::{AndroidArrow, MaterialSpinner};
use crate::input::{PointerInput, position_of, scroll_offset};
use crate::model::{
    COMPLETE_HOLD_MS, DEFAULT_BACKGROUND, DEFAULT_COLOR, DEFAULT_MAX_PULL, DEFAULT_THRESHOLD,
    PullConfig, PullState,
};
use crate::presentation::{CONTAINER_STYLE, Glyph};
use crate::refresh::{RefreshHandler, run_refresh};
use crate::state::{PullMachine, Release, Settled};
use crate::styles::StyleGuard;
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct PullToRefreshProps {
    #[prop_or_default]
    pub children: Children,
    /// Run once per qualifying pull. `None` behaves like a handler that succeeds at once.
    #[prop_or_default]
    pub on_refresh: Option<RefreshHandler>,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or(DEFAULT_MAX_PULL)]
    pub max_pull: f64,
    #[prop_or(AttrValue::Static(DEFAULT_COLOR))]
    pub color: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_BACKGROUND))]
    pub background_color: AttrValue,
}

impl PullToRefreshProps {
    fn config(&self) -> PullConfig {
        PullConfig::new(self.threshold, self.max_pull).with_colors(&self.color, &self.background_color)
    }
}

// Handles shared between the DOM listeners, the refresh task and the hold timer
#[derive(Clone)]
struct Shared {
    machine: Rc<RefCell<PullMachine>>,
    handler: Rc<RefCell<Option<RefreshHandler>>>,
    content_ref: NodeRef,
    mounted: Rc<RefCell<bool>>,
    hold_timer: Rc<RefCell<Option<i32>>>,
    redraw: UseForceUpdateHandle,
}

impl Shared {
    fn scroll(&self) -> f64 {
        scroll_offset(self.content_ref.cast::<Element>().as_ref())
    }

    fn on_start(&self, input: PointerInput) {
        let Some(y) = position_of(&input) else {
            return;
        };
        let scroll = self.scroll();
        let started = self.machine.borrow_mut().start(y, scroll);
        if started {
            self.redraw.force_update();
        }
    }

    fn on_move(&self, input: PointerInput) {
        if !self.machine.borrow().is_dragging() {
            return;
        }
        let Some(y) = position_of(&input) else {
            return;
        };
        let scroll = self.scroll();
        let outcome = self.machine.borrow_mut().move_to(y, scroll);
        if outcome.suppresses_default() {
            input.prevent_default();
        }
        if outcome.needs_redraw() {
            self.redraw.force_update();
        }
    }

    fn on_end(&self) {
        let pulled = self.machine.borrow().distance();
        let released = self.machine.borrow_mut().release();
        match released {
            Release::Ignored => {}
            Release::Reset => self.redraw.force_update(),
            Release::Refresh => {
                clog(&format!("pull-to-refresh: refresh triggered at {pulled:.1}"));
                self.redraw.force_update();
                self.spawn_refresh();
            }
        }
    }

    fn spawn_refresh(&self) {
        let shared = self.clone();
        let handler = self.handler.borrow().clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = run_refresh(handler.as_ref()).await;
            if !*shared.mounted.borrow() {
                return;
            }
            let settled = shared.machine.borrow_mut().settle(outcome);
            match settled {
                Settled::Complete => {
                    shared.redraw.force_update();
                    shared.schedule_reset();
                }
                Settled::Failed => shared.redraw.force_update(),
                Settled::Stale => {}
            }
        });
    }

    fn schedule_reset(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let cb = {
            let shared = self.clone();
            Closure::once_into_js(move || {
                shared.hold_timer.borrow_mut().take();
                if !*shared.mounted.borrow() {
                    return;
                }
                let finished = shared.machine.borrow_mut().finish();
                if finished {
                    shared.redraw.force_update();
                }
            })
        };
        if let Ok(id) = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), COMPLETE_HOLD_MS)
        {
            *self.hold_timer.borrow_mut() = Some(id);
        }
    }
}

fn pointer_listener(
    shared: &Shared,
    convert: fn(Event) -> Option<PointerInput>,
    handle: fn(&Shared, PointerInput),
) -> Closure<dyn FnMut(Event)> {
    let shared = shared.clone();
    Closure::wrap(Box::new(move |e: Event| {
        if let Some(input) = convert(e) {
            handle(&shared, input);
        }
    }) as Box<dyn FnMut(_)>)
}

fn end_listener(shared: &Shared) -> Closure<dyn FnMut(Event)> {
    let shared = shared.clone();
    Closure::wrap(Box::new(move |_: Event| shared.on_end()) as Box<dyn FnMut(_)>)
}

#[function_component(PullToRefresh)]
pub fn pull_to_refresh(props: &PullToRefreshProps) -> Html {
    let container_ref = use_node_ref();
    let content_ref = use_node_ref();
    let config = props.config();
    let machine = {
        let config = config.clone();
        use_mut_ref(move || PullMachine::new(config))
    };
    let handler = {
        let initial = props.on_refresh.clone();
        use_mut_ref(move || initial)
    };
    let mounted = use_mut_ref(|| false);
    let hold_timer = use_mut_ref(|| None::<i32>);
    let redraw = use_force_update();

    // Listeners are installed once; keep the props they read current
    {
        let machine = machine.clone();
        use_effect_with(config.clone(), move |config| {
            machine.borrow_mut().set_config(config.clone());
            || ()
        });
    }
    {
        let handler = handler.clone();
        use_effect_with(props.on_refresh.clone(), move |latest| {
            *handler.borrow_mut() = latest.clone();
            || ()
        });
    }

    {
        let container_ref = container_ref.clone();
        let shared = Shared {
            machine: machine.clone(),
            handler: handler.clone(),
            content_ref: content_ref.clone(),
            mounted: mounted.clone(),
            hold_timer: hold_timer.clone(),
            redraw: redraw.clone(),
        };
        use_effect_with((), move |_| {
            *shared.mounted.borrow_mut() = true;
            let styles = StyleGuard::acquire();
            let container = container_ref.cast::<HtmlElement>();

            // Registered directly (not via html! props) so touchmove stays non-passive
            let listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)> = vec![
                ("touchstart", pointer_listener(&shared, PointerInput::touch, Shared::on_start)),
                ("mousedown", pointer_listener(&shared, PointerInput::mouse, Shared::on_start)),
                ("touchmove", pointer_listener(&shared, PointerInput::touch, Shared::on_move)),
                ("mousemove", pointer_listener(&shared, PointerInput::mouse, Shared::on_move)),
                ("touchend", end_listener(&shared)),
                ("touchcancel", end_listener(&shared)),
                ("mouseup", end_listener(&shared)),
                ("mouseleave", end_listener(&shared)),
            ];
            if let Some(el) = &container {
                for (name, cb) in &listeners {
                    el.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                        .ok();
                }
            }

            move || {
                *shared.mounted.borrow_mut() = false;
                if let Some(el) = &container {
                    for (name, cb) in &listeners {
                        let _ = el.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
                    }
                }
                if let Some(id) = shared.hold_timer.borrow_mut().take() {
                    if let Some(win) = web_sys::window() {
                        win.clear_timeout_with_handle(id);
                    }
                }
                drop(styles);
            }
        });
    }

    let (presentation, busy) = {
        let m = machine.borrow();
        (m.presentation(), m.state() == PullState::Refreshing)
    };
    let glyph = match presentation.glyph {
        Glyph::Spinner => html! { <MaterialSpinner color={config.color.clone()} /> },
        Glyph::Arrow {
            rotation_deg,
            opacity,
        } => html! { <AndroidArrow color={config.color.clone()} {rotation_deg} {opacity} /> },
    };

    html! {
        <div ref={container_ref} style={CONTAINER_STYLE}>
            <div style={presentation.bubble_style(&config.background_color)}>
                { glyph }
            </div>
            <div ref={content_ref} style={presentation.content_style()} aria-busy={busy.to_string()}>
                { props.children.clone() }
            </div>
        </div>
    }
}
