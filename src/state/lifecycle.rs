//! Mount/unmount boundary and the click handlers it owns.
//!
//! DESIGN
//! ======
//! Handlers live in `Bindings` only between `on_mount` and `on_unmount`.
//! A click is routed through the registry, so a click arriving after unmount
//! finds nothing bound and cannot reach the state machine. Installing always
//! clears first, which makes a repeated mount harmless.

use std::collections::BTreeMap;

use super::assistant::{Control, DisplayState};

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// Explicit component lifecycle, driven by whatever hosts the widget.
pub trait Lifecycle {
    fn on_mount(&mut self);
    fn on_unmount(&mut self);
}

/// Click handler: maps the current state to the next one.
pub type Handler = fn(DisplayState) -> DisplayState;

fn accepted_tip(state: DisplayState) -> DisplayState {
    state.apply(Control::Accept)
}

fn declined_tip(state: DisplayState) -> DisplayState {
    state.apply(Control::Decline)
}

fn closed_tip(state: DisplayState) -> DisplayState {
    state.apply(Control::Close)
}

/// Handler installed for `control` on mount.
pub fn handler_for(control: Control) -> Handler {
    match control {
        Control::Accept => accepted_tip,
        Control::Decline => declined_tip,
        Control::Close => closed_tip,
    }
}

/// Registry of currently attached click handlers, one per control at most.
#[derive(Debug, Default)]
pub struct Bindings {
    handlers: BTreeMap<Control, Handler>,
}

impl Bindings {
    /// Attach a handler to every control, replacing any existing ones.
    pub fn install(&mut self) {
        self.release();
        for control in Control::ALL {
            self.handlers.insert(control, handler_for(control));
        }
    }

    /// Detach every handler.
    pub fn release(&mut self) {
        self.handlers.clear();
    }

    pub fn get(&self, control: Control) -> Option<Handler> {
        self.handlers.get(&control).copied()
    }

    pub fn is_bound(&self, control: Control) -> bool {
        self.handlers.contains_key(&control)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
