//! Edge offsets driven by the `top`/`right`/`bottom`/`left` attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;

/// Characters that would let a value escape its declaration or rule.
const FORBIDDEN_VALUE_CHARS: &[char] = &[';', '{', '}', '<', '>', '"', '\''];

/// Whether `value` can sit in a single CSS declaration without ending it,
/// opening a comment, or closing the enclosing rule or `<style>` element.
pub fn is_safe_css_value(value: &str) -> bool {
    !value.contains(FORBIDDEN_VALUE_CHARS) && !value.contains("/*") && !value.contains("*/")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    #[error("unsupported attribute: {0}")]
    Unsupported(String),
    #[error("invalid value for {edge}: {value:?}")]
    InvalidValue { edge: Edge, value: String },
}

/// Viewport edge a positional attribute offsets from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Attribute name, which is also the CSS property name.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute())
    }
}

impl FromStr for Edge {
    type Err = AttributeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|edge| edge.attribute() == name)
            .ok_or_else(|| AttributeError::Unsupported(name.to_owned()))
    }
}

/// Normalize a raw attribute value. `Ok(None)` means the edge is cleared.
pub fn normalize_value(edge: Edge, raw: Option<&str>) -> Result<Option<String>, AttributeError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !is_safe_css_value(value) {
        return Err(AttributeError::InvalidValue { edge, value: value.to_owned() });
    }
    Ok(Some(value.to_owned()))
}

/// Optional CSS length per edge. Unset edges carry no offset at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    pub top: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
    pub left: Option<String>,
}

impl PositionConfig {
    pub fn get(&self, edge: Edge) -> Option<&str> {
        self.slot(edge).as_deref()
    }

    fn slot(&self, edge: Edge) -> &Option<String> {
        match edge {
            Edge::Top => &self.top,
            Edge::Right => &self.right,
            Edge::Bottom => &self.bottom,
            Edge::Left => &self.left,
        }
    }

    fn slot_mut(&mut self, edge: Edge) -> &mut Option<String> {
        match edge {
            Edge::Top => &mut self.top,
            Edge::Right => &mut self.right,
            Edge::Bottom => &mut self.bottom,
            Edge::Left => &mut self.left,
        }
    }

    /// Set or clear one edge. Returns whether the stored value changed.
    ///
    /// On error the previous value is kept.
    pub fn set(&mut self, edge: Edge, value: Option<&str>) -> Result<bool, AttributeError> {
        let next = normalize_value(edge, value)?;
        let slot = self.slot_mut(edge);
        if *slot == next {
            return Ok(false);
        }
        *slot = next;
        Ok(true)
    }

    /// Attribute-name entry point; rejects anything but the four edges.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) -> Result<bool, AttributeError> {
        let edge = name.parse::<Edge>()?;
        self.set(edge, value)
    }

    /// True when any edge carries an offset, which switches to fixed positioning.
    pub fn is_fixed(&self) -> bool {
        Edge::ALL.into_iter().any(|edge| self.get(edge).is_some())
    }

    /// Set edges in top, right, bottom, left order.
    pub fn offsets(&self) -> impl Iterator<Item = (Edge, &str)> + '_ {
        Edge::ALL
            .into_iter()
            .filter_map(|edge| self.get(edge).map(|value| (edge, value)))
    }

    /// Re-run value normalization over every edge, e.g. after deserializing.
    pub fn validate(&mut self) -> Result<(), AttributeError> {
        for edge in Edge::ALL {
            let next = normalize_value(edge, self.get(edge))?;
            *self.slot_mut(edge) = next;
        }
        Ok(())
    }
}
