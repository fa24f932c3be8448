//! Cosmetic parameters for the assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both presets share the same markup and behavior; only colors, sizing and
//! the mascot image differ. All rules are emitted under a per-theme root
//! selector, and every widget-owned element is reverted to user-agent styles
//! before the theme applies, so host rules of ordinary specificity (element
//! names, classes) do not reach the widget's chrome. Slot wrappers are left
//! alone so projected host content keeps the host's styling. Theme values are
//! checked before they reach the stylesheet so none can close a rule and
//! leak declarations onto the page.

use serde::{Deserialize, Serialize};

use super::position::is_safe_css_value;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const ROOT_CLASS: &str = "office-assistant";

/// Widget-owned elements reset before themed rules apply.
const OWNED_ELEMENTS: &[&str] = &["container", "dialog", "intro", "tip", "button", "image"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("invalid theme value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub background: String,
    pub hover_background: String,
    pub border_color: String,
    pub button_border_color: String,
    pub dialog_width_px: u32,
    pub image_src: String,
    pub image_alt: String,
    /// Label of the tip region's dismiss button.
    pub close_label: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::unruly_cat()
    }
}

impl Theme {
    pub fn unruly_cat() -> Self {
        Self {
            name: "unruly-cat".to_owned(),
            background: "white".to_owned(),
            hover_background: "#eee".to_owned(),
            border_color: "#444".to_owned(),
            button_border_color: "#333".to_owned(),
            dialog_width_px: 223,
            image_src: "./unruly-cat.png".to_owned(),
            image_alt: "Office assistant cat".to_owned(),
            close_label: "Thanks kitty".to_owned(),
        }
    }

    pub fn classic() -> Self {
        Self {
            name: "classic".to_owned(),
            background: "#ffffcc".to_owned(),
            hover_background: "#f2f2b0".to_owned(),
            border_color: "#222".to_owned(),
            button_border_color: "#222".to_owned(),
            dialog_width_px: 190,
            image_src: "./classic-assistant.png".to_owned(),
            image_alt: "Office assistant".to_owned(),
            ..Self::unruly_cat()
        }
    }

    /// Value for the root's `data-theme` attribute, reduced to `[a-z0-9-]`.
    pub fn scope(&self) -> String {
        let scope: String = self
            .name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if scope.is_empty() { "default".to_owned() } else { scope }
    }

    /// Selector every rule of this theme is nested under.
    pub fn root_selector(&self) -> String {
        format!(".{ROOT_CLASS}[data-theme=\"{}\"]", self.scope())
    }

    /// Color fields by name, in the order they are checked.
    fn css_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("background", self.background.as_str()),
            ("hover_background", self.hover_background.as_str()),
            ("border_color", self.border_color.as_str()),
            ("button_border_color", self.button_border_color.as_str()),
        ]
    }

    /// Reject any color value that could break out of its declaration.
    pub fn validate(&self) -> Result<(), ThemeError> {
        match self.css_fields().into_iter().find(|(_, value)| !is_safe_css_value(value)) {
            Some((field, value)) => Err(ThemeError::InvalidValue { field, value: value.to_owned() }),
            None => Ok(()),
        }
    }

    /// Rule resetting every widget-owned element to user-agent styles.
    pub fn reset_rule(&self) -> String {
        let root = self.root_selector();
        let selectors: Vec<String> = OWNED_ELEMENTS
            .iter()
            .map(|part| format!("{root} .{ROOT_CLASS}__{part}"))
            .collect();
        format!("{} {{ all: revert; }}", selectors.join(", "))
    }

    /// Scoped stylesheet for the widget's internal markup.
    ///
    /// A color that fails `validate` is replaced by `initial`.
    pub fn stylesheet(&self) -> String {
        let root = self.root_selector();
        let reset = self.reset_rule();
        let [bg, hover, border, button_border] = self.css_fields().map(|(field, value)| {
            if is_safe_css_value(value) {
                value
            } else {
                leptos::logging::warn!("office-assistant: ignoring theme {field}: {value:?}");
                "initial"
            }
        });
        let width = self.dialog_width_px;

        format!(
            "{root} {{ all: initial; display: block; font-family: sans-serif; font-size: 14px; color: #111; }}\n\
             {reset}\n\
             {root} .{ROOT_CLASS}__button {{ cursor: pointer; display: block; margin: 10px 0; padding: 4px 6px; background: {bg}; border: 1px solid {button_border}; font: inherit; color: inherit; }}\n\
             {root} .{ROOT_CLASS}__button:hover {{ background: {hover}; }}\n\
             {root} .{ROOT_CLASS}__dialog {{ width: {width}px; margin-left: 7px; border-radius: 45% 40% 4px 4px; margin-bottom: -4px; background: {bg}; padding: 40px 20px 15px 20px; border-left: 6px solid {border}; border-right: 13px solid {border}; border-top: 7px solid {border}; }}\n\
             {root} .{ROOT_CLASS}__image {{ display: block; }}\n"
        )
    }
}
