//! Framework-independent core of the office assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos component owns one `AssistantWidget` and forwards prop changes
//! and button clicks to it. Everything observable (state, position, the
//! derived style) can be driven and inspected here without a DOM.

use super::assistant::{Control, DisplayState};
use super::config::AssistantConfig;
use super::lifecycle::{Bindings, Lifecycle};
use super::position::{Edge, PositionConfig};
use super::theme::Theme;
use crate::util::style::{AssistantStyle, assistant_style};

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

#[derive(Debug, Default)]
pub struct AssistantWidget {
    state: DisplayState,
    position: PositionConfig,
    theme: Theme,
    bindings: Bindings,
}

impl AssistantWidget {
    /// Build the widget in `Prompting` with nothing bound yet.
    pub fn new(config: AssistantConfig) -> Self {
        Self {
            state: DisplayState::Prompting,
            position: config.position,
            theme: config.theme,
            bindings: Bindings::default(),
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn position(&self) -> &PositionConfig {
        &self.position
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn is_mounted(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// Host attribute changed (set, changed, or removed with `None`).
    ///
    /// Unsupported names and rejected values leave the widget untouched.
    /// Returns whether the position changed.
    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> bool {
        match name.parse::<Edge>() {
            Ok(edge) => self.set_edge(edge, value),
            Err(e) => {
                leptos::logging::warn!("office-assistant: ignoring attribute: {e}");
                false
            }
        }
    }

    /// Typed variant of `attribute_changed` for hosts that already know the edge.
    pub fn set_edge(&mut self, edge: Edge, value: Option<&str>) -> bool {
        match self.position.set(edge, value) {
            Ok(changed) => changed,
            Err(e) => {
                leptos::logging::warn!("office-assistant: ignoring attribute: {e}");
                false
            }
        }
    }

    /// Route a click through the bound handler for `control`.
    ///
    /// Nothing happens when the control is unbound (before mount, after
    /// unmount) or not on screen in the current state.
    pub fn click(&mut self, control: Control) -> DisplayState {
        let Some(handler) = self.bindings.get(control) else {
            return self.state;
        };
        if !self.state.accepts(control) {
            return self.state;
        }
        let next = handler(self.state);
        if next != self.state {
            leptos::logging::log!("office-assistant: {:?} -> {:?} via {:?}", self.state, next, control);
            self.state = next;
        }
        self.state
    }

    /// Style descriptor for the current state and position.
    pub fn style(&self) -> AssistantStyle {
        assistant_style(self.state, &self.position)
    }
}

impl Lifecycle for AssistantWidget {
    fn on_mount(&mut self) {
        let was_mounted = self.is_mounted();
        self.bindings.install();
        if !was_mounted {
            leptos::logging::log!("office-assistant: mounted, {} handlers bound", self.bindings.len());
        }
    }

    fn on_unmount(&mut self) {
        if self.is_mounted() {
            self.bindings.release();
            leptos::logging::log!("office-assistant: unmounted, handlers released");
        }
    }
}
