use super::*;

fn subset(mask: u8) -> Vec<Edge> {
    Edge::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, edge)| edge)
        .collect()
}

// =============================================================
// Edge parsing
// =============================================================

#[test]
fn edge_parses_the_four_attribute_names() {
    assert_eq!("top".parse::<Edge>(), Ok(Edge::Top));
    assert_eq!("right".parse::<Edge>(), Ok(Edge::Right));
    assert_eq!("bottom".parse::<Edge>(), Ok(Edge::Bottom));
    assert_eq!("left".parse::<Edge>(), Ok(Edge::Left));
}

#[test]
fn edge_rejects_other_names() {
    assert_eq!(
        "width".parse::<Edge>(),
        Err(AttributeError::Unsupported("width".to_owned()))
    );
    assert!("Top".parse::<Edge>().is_err());
}

// =============================================================
// Value normalization
// =============================================================

#[test]
fn normalize_value_trims_and_clears_blank() {
    assert_eq!(normalize_value(Edge::Top, Some(" 10px ")), Ok(Some("10px".to_owned())));
    assert_eq!(normalize_value(Edge::Top, Some("   ")), Ok(None));
    assert_eq!(normalize_value(Edge::Top, None), Ok(None));
}

#[test]
fn normalize_value_rejects_declaration_breakout() {
    let err = normalize_value(Edge::Left, Some("0; display: none")).unwrap_err();
    assert_eq!(
        err,
        AttributeError::InvalidValue { edge: Edge::Left, value: "0; display: none".to_owned() }
    );
}

#[test]
fn normalize_value_accepts_keywords_and_calc() {
    assert_eq!(normalize_value(Edge::Right, Some("auto")), Ok(Some("auto".to_owned())));
    assert_eq!(
        normalize_value(Edge::Right, Some("calc(100% - 2em)")),
        Ok(Some("calc(100% - 2em)".to_owned()))
    );
}

// =============================================================
// PositionConfig
// =============================================================

#[test]
fn default_config_is_static() {
    let config = PositionConfig::default();
    assert!(!config.is_fixed());
    assert_eq!(config.offsets().count(), 0);
}

#[test]
fn fixed_iff_any_edge_set_for_every_subset() {
    for mask in 0u8..16 {
        let edges = subset(mask);
        let mut config = PositionConfig::default();
        for (i, edge) in edges.iter().enumerate() {
            config.set(*edge, Some(format!("{i}px").as_str())).unwrap();
        }
        assert_eq!(config.is_fixed(), !edges.is_empty(), "mask {mask:04b}");
        for edge in Edge::ALL {
            match edges.iter().position(|e| *e == edge) {
                Some(i) => assert_eq!(config.get(edge), Some(format!("{i}px").as_str())),
                None => assert_eq!(config.get(edge), None),
            }
        }
    }
}

#[test]
fn set_reports_changes_only() {
    let mut config = PositionConfig::default();
    assert_eq!(config.set(Edge::Top, Some("10px")), Ok(true));
    assert_eq!(config.set(Edge::Top, Some("10px")), Ok(false));
    assert_eq!(config.set(Edge::Top, Some("12px")), Ok(true));
    assert_eq!(config.set(Edge::Top, None), Ok(true));
    assert_eq!(config.set(Edge::Top, None), Ok(false));
}

#[test]
fn clearing_last_edge_returns_to_static() {
    let mut config = PositionConfig::default();
    config.set(Edge::Bottom, Some("0")).unwrap();
    assert!(config.is_fixed());
    config.set(Edge::Bottom, None).unwrap();
    assert!(!config.is_fixed());
}

#[test]
fn invalid_value_keeps_previous() {
    let mut config = PositionConfig::default();
    config.set(Edge::Left, Some("20px")).unwrap();
    assert!(config.set(Edge::Left, Some("1px}")).is_err());
    assert_eq!(config.get(Edge::Left), Some("20px"));
}

#[test]
fn set_attribute_ignores_unknown_names() {
    let mut config = PositionConfig::default();
    assert!(matches!(
        config.set_attribute("z-index", Some("10")),
        Err(AttributeError::Unsupported(_))
    ));
    assert_eq!(config, PositionConfig::default());
}

#[test]
fn offsets_follow_edge_order() {
    let mut config = PositionConfig::default();
    config.set(Edge::Left, Some("20px")).unwrap();
    config.set(Edge::Top, Some("10px")).unwrap();
    let offsets: Vec<_> = config.offsets().collect();
    assert_eq!(offsets, vec![(Edge::Top, "10px"), (Edge::Left, "20px")]);
}

#[test]
fn validate_normalizes_deserialized_values() {
    let mut config: PositionConfig =
        serde_json::from_str(r#"{"top":" 5px ","left":""}"#).unwrap();
    config.validate().unwrap();
    assert_eq!(config.get(Edge::Top), Some("5px"));
    assert_eq!(config.get(Edge::Left), None);
    assert!(config.right.is_none());
}

#[test]
fn is_safe_css_value_rejects_comment_markers() {
    assert!(is_safe_css_value("10px"));
    assert!(is_safe_css_value("calc(100% - 2em)"));
    assert!(!is_safe_css_value("10px /* x"));
    assert!(!is_safe_css_value("x */"));
    assert_eq!(
        normalize_value(Edge::Top, Some("0 /*")),
        Err(AttributeError::InvalidValue { edge: Edge::Top, value: "0 /*".to_owned() })
    );
}
