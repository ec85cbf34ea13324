//! The pull gesture state machine.
//!
//! [`PullMachine`] owns the whole mutable core of one mounted component: the
//! current [`PullState`], the damped distance and the active [`GestureSession`].
//! Each input method returns an outcome telling the caller what side effect,
//! if any, it has to perform (suppress the DOM default, run the refresh
//! handler, schedule the Complete hold). The machine itself never touches the DOM.

use crate::model::{PullConfig, PullState, damped_distance};
use crate::presentation::{Presentation, present};
use crate::refresh::RefreshError;
use crate::state::gesture::{GestureSession, at_top};
use crate::util::cerror;

/// Result of feeding a move event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// No gesture in progress.
    Ignored,
    /// Content scrolled away from the top; the gesture was dropped.
    Aborted,
    /// Upward or zero displacement; nothing changed, native scrolling stays enabled.
    Passive,
    /// Downward pull applied; the caller must suppress the native default.
    Tracked,
}

impl Move {
    /// Only a tracked downward pull may cancel native scrolling.
    pub fn suppresses_default(self) -> bool {
        matches!(self, Move::Tracked)
    }

    /// Tracked and Aborted change what is on screen; the rest leave it untouched.
    pub fn needs_redraw(self) -> bool {
        matches!(self, Move::Tracked | Move::Aborted)
    }
}

/// Result of an end event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// No gesture in progress (duplicate end, or never started).
    Ignored,
    /// Released below the threshold; back to Idle.
    Reset,
    /// Released past the threshold; the caller must run the refresh handler once.
    Refresh,
}

/// Result of handing the refresh outcome back to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    /// Success; the caller must schedule [`PullMachine::finish`] after the hold delay.
    Complete,
    /// Failure was logged and the machine is Idle again.
    Failed,
    /// The machine was not waiting on a refresh; outcome dropped.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct PullMachine {
    config: PullConfig,
    state: PullState,
    distance: f64,
    session: Option<GestureSession>,
}

impl PullMachine {
    pub fn new(config: PullConfig) -> Self {
        Self {
            config: config.normalized(),
            ..Default::default()
        }
    }

    /// Props may change between renders. An open pull is re-judged against the
    /// new bounds so Ready always means "past the current threshold".
    pub fn set_config(&mut self, config: PullConfig) {
        self.config = config.normalized();
        if self.state.is_settling() {
            return;
        }
        self.distance = self.distance.min(self.config.max_pull);
        if self.session.is_some() && self.state != PullState::Idle {
            self.state = self.pull_state();
        }
    }

    pub fn state(&self) -> PullState {
        self.state
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a gesture at `y`. Rejected when scrolled down, when a gesture is
    /// already open, or while a refresh is still settling.
    pub fn start(&mut self, y: f64, scroll_offset: f64) -> bool {
        if self.session.is_some() || self.state.is_settling() || !at_top(scroll_offset) {
            return false;
        }
        self.session = Some(GestureSession::begin(y));
        true
    }

    pub fn move_to(&mut self, y: f64, scroll_offset: f64) -> Move {
        let Some(session) = self.session.as_mut() else {
            return Move::Ignored;
        };
        if !at_top(scroll_offset) {
            // The page started scrolling normally; this contact is spent.
            self.reset();
            return Move::Aborted;
        }
        let diff = session.track(y);
        if diff <= 0.0 {
            return Move::Passive;
        }
        self.distance = damped_distance(diff, self.config.max_pull);
        if !self.state.is_settling() {
            self.state = self.pull_state();
        }
        Move::Tracked
    }

    fn pull_state(&self) -> PullState {
        if self.distance > self.config.threshold {
            PullState::Ready
        } else {
            PullState::Pulling
        }
    }

    /// Ends the gesture. The session is consumed before anything else so a
    /// second end event (touchend + mouseleave) is a no-op.
    pub fn release(&mut self) -> Release {
        if self.session.take().is_none() {
            return Release::Ignored;
        }
        if self.distance > self.config.threshold && !self.state.is_settling() {
            self.state = PullState::Refreshing;
            self.distance = self.config.hold_distance();
            Release::Refresh
        } else {
            self.reset();
            Release::Reset
        }
    }

    pub fn settle(&mut self, outcome: Result<(), RefreshError>) -> Settled {
        if self.state != PullState::Refreshing {
            return Settled::Stale;
        }
        match outcome {
            Ok(()) => {
                self.state = PullState::Complete;
                Settled::Complete
            }
            Err(err) => {
                cerror(&format!("Refresh failed: {err}"));
                self.reset();
                Settled::Failed
            }
        }
    }

    /// Complete hold elapsed. Returns false if the machine had already moved on.
    pub fn finish(&mut self) -> bool {
        if self.state != PullState::Complete {
            return false;
        }
        self.reset();
        true
    }

    pub fn presentation(&self) -> Presentation {
        present(
            self.state,
            self.distance,
            self.config.threshold,
            self.is_dragging(),
        )
    }

    fn reset(&mut self) {
        self.state = PullState::Idle;
        self.distance = 0.0;
        self.session = None;
    }
}
