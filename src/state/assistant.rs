//! Two-stage disclosure flow: prompt, then tip, then dismissed.
//!
//! DESIGN
//! ======
//! Transitions are a pure function of the current state and the clicked
//! control. Anything outside the transition table is a no-op, so duplicate or
//! stale clicks can never move the widget backwards.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

/// Which phase of the dialog is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    /// Intro region visible, asking whether the user wants a tip.
    #[default]
    Prompting,
    /// Tip region visible with its close control.
    ShowingTip,
    /// Whole widget hidden. Terminal.
    Dismissed,
}

/// Interactive controls inside the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
    Accept,
    Decline,
    Close,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Accept, Control::Decline, Control::Close];

    /// Element id of the button carrying this control.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Accept => "accept-button",
            Self::Decline => "decline-button",
            Self::Close => "close-dialog-button",
        }
    }
}

impl DisplayState {
    /// Next state after `control` is clicked.
    #[must_use]
    pub fn apply(self, control: Control) -> Self {
        match (self, control) {
            (Self::Prompting, Control::Accept) => Self::ShowingTip,
            (Self::Prompting, Control::Decline) | (Self::ShowingTip, Control::Close) => Self::Dismissed,
            (state, _) => state,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Dismissed
    }

    pub fn widget_visible(self) -> bool {
        !self.is_terminal()
    }

    pub fn intro_visible(self) -> bool {
        self == Self::Prompting
    }

    pub fn tip_visible(self) -> bool {
        self == Self::ShowingTip
    }

    /// Whether `control` is on screen, and therefore clickable, in this state.
    pub fn accepts(self, control: Control) -> bool {
        match control {
            Control::Accept | Control::Decline => self.intro_visible(),
            Control::Close => self.tip_visible(),
        }
    }
}
