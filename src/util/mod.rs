//! Pure helpers shared by the component layer.

pub mod style;
