//! Office assistant widget: a mascot that offers a tip, shows it on accept,
//! and dismisses itself on decline or close.
//!
//! ARCHITECTURE
//! ============
//! - `state`: DOM-free core (display state machine, position config, theme,
//!   lifecycle bindings).
//! - `util`: declarative state to style mapping.
//! - `components`: the Leptos `<OfficeAssistant>` shell.

pub mod components;
pub mod state;
pub mod util;

pub use components::office_assistant::OfficeAssistant;
pub use state::assistant::{Control, DisplayState};
pub use state::config::{AssistantConfig, ConfigError};
pub use state::lifecycle::Lifecycle;
pub use state::position::{AttributeError, Edge, PositionConfig};
pub use state::theme::{Theme, ThemeError};
pub use state::widget::AssistantWidget;

/// Route panics and `log` output to the browser console.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("office-assistant: console logger not installed: {e}");
    }
}
