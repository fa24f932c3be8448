//! Widget state: display phase, position, theme, lifecycle.
//!
//! DESIGN
//! ======
//! Nothing here depends on a live DOM. The component layer only forwards
//! events into `widget::AssistantWidget` and renders what it reports.

pub mod assistant;
pub mod config;
pub mod lifecycle;
pub mod position;
pub mod theme;
pub mod widget;
