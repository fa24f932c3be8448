//! Declarative style mapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every inline style the widget carries is derived here from the display
//! state and the position config. Handlers never touch styles directly; they
//! change state and the view re-reads `assistant_style`.

use std::fmt::Write as _;

use crate::state::assistant::DisplayState;
use crate::state::position::{Edge, PositionConfig};

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Positioning {
    /// Flows inline with the host page.
    #[default]
    Static,
    /// Pinned to the viewport by the configured edge offsets.
    Fixed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerStyle {
    pub positioning: Positioning,
    pub offsets: Vec<(Edge, String)>,
    pub visible: bool,
}

/// Full style descriptor for one render of the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssistantStyle {
    pub container: ContainerStyle,
    pub intro_visible: bool,
    pub tip_visible: bool,
}

pub fn assistant_style(state: DisplayState, position: &PositionConfig) -> AssistantStyle {
    let positioning = if position.is_fixed() { Positioning::Fixed } else { Positioning::Static };
    let offsets = position
        .offsets()
        .map(|(edge, value)| (edge, value.to_owned()))
        .collect();

    AssistantStyle {
        container: ContainerStyle { positioning, offsets, visible: state.widget_visible() },
        intro_visible: state.intro_visible(),
        tip_visible: state.tip_visible(),
    }
}

pub fn display_css(visible: bool) -> &'static str {
    if visible { "display: block;" } else { "display: none;" }
}

impl ContainerStyle {
    /// Inline style for the root container. Unset edges emit nothing.
    pub fn to_css(&self) -> String {
        if !self.visible {
            return display_css(false).to_owned();
        }
        let mut css = String::new();
        if self.positioning == Positioning::Fixed {
            css.push_str("position: fixed;");
            for (edge, value) in &self.offsets {
                let _ = write!(css, " {edge}: {value};");
            }
        }
        css
    }
}
