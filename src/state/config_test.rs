use super::*;
use crate::state::position::Edge;

#[test]
fn from_attributes_keeps_positional_pairs() {
    let config = AssistantConfig::from_attributes([("top", "10px"), ("left", "20px")]);
    assert_eq!(config.position.get(Edge::Top), Some("10px"));
    assert_eq!(config.position.get(Edge::Left), Some("20px"));
    assert_eq!(config.position.get(Edge::Right), None);
    assert_eq!(config.position.get(Edge::Bottom), None);
}

#[test]
fn from_attributes_skips_unsupported_and_invalid() {
    let config = AssistantConfig::from_attributes([
        ("class", "fancy"),
        ("bottom", "1px;color:red"),
        ("right", "5%"),
    ]);
    assert_eq!(config.position.get(Edge::Bottom), None);
    assert_eq!(config.position.get(Edge::Right), Some("5%"));
}

#[test]
fn from_json_defaults_missing_fields() {
    let config = AssistantConfig::from_json(r#"{"position":{"bottom":"0"}}"#).unwrap();
    assert_eq!(config.position.get(Edge::Bottom), Some("0"));
    assert_eq!(config.theme, Theme::default());
}

#[test]
fn from_json_reads_theme() {
    let config =
        AssistantConfig::from_json(r#"{"theme":{"name":"classic","dialog_width_px":190}}"#).unwrap();
    assert_eq!(config.theme.name, "classic");
    assert_eq!(config.theme.dialog_width_px, 190);
    assert!(!config.position.is_fixed());
}

#[test]
fn from_json_rejects_malformed_document() {
    assert!(matches!(AssistantConfig::from_json("{"), Err(ConfigError::Json(_))));
}

#[test]
fn from_json_rejects_breakout_values() {
    let err = AssistantConfig::from_json(r#"{"position":{"top":"0}"}}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Attribute(AttributeError::InvalidValue { edge: Edge::Top, .. })));
}

#[test]
fn with_theme_replaces_theme() {
    let config = AssistantConfig::default().with_theme(Theme::classic());
    assert_eq!(config.theme, Theme::classic());
}

#[test]
fn from_json_rejects_theme_rule_breakout() {
    let err = AssistantConfig::from_json(r#"{"theme":{"background":"red; } body {"}}"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Theme(ThemeError::InvalidValue { field: "background", .. })
    ));
}

#[test]
fn from_json_accepts_plain_theme_colors() {
    let config =
        AssistantConfig::from_json(r##"{"theme":{"border_color":"rgb(10, 20, 30)","background":"#fff"}}"##)
            .unwrap();
    assert_eq!(config.theme.border_color, "rgb(10, 20, 30)");
}
