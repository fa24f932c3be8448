//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget's markup and forward DOM events into the
//! DOM-free core under `state`.

pub mod office_assistant;
