//! Tests for parser configuration loading and tree serialization.

mod common;
use common::*;

use serde_json::json;
use unordered_sql_core::parser::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use unordered_sql_core::{ConfigError, Parser, ParserConfig};

#[test]
fn config_from_json() {
    let config: ParserConfig = serde_json::from_str(r#"{"max_depth": 32}"#).unwrap();
    assert_eq!(config.max_depth, 32);
    assert!(config.validate().is_ok());
}

#[test]
fn config_missing_fields_use_defaults() {
    let config: ParserConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ParserConfig::default());
    assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn config_rejects_unknown_fields() {
    let result = serde_json::from_str::<ParserConfig>(r#"{"max_dpeth": 32}"#);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("unknown field"), "{err}");
}

#[test]
fn config_validation_after_deserialize() {
    let config: ParserConfig = serde_json::from_str(r#"{"max_depth": 0}"#).unwrap();
    assert_eq!(config.validate(), Err(ConfigError::ZeroMaxDepth));

    let config: ParserConfig = serde_json::from_str(r#"{"max_depth": 100000}"#).unwrap();
    assert_eq!(
        config.validate(),
        Err(ConfigError::MaxDepthTooLarge {
            requested: 100_000,
            limit: MAX_DEPTH_LIMIT,
        })
    );
}

#[test]
fn oversized_deserialized_limit_is_clamped() {
    let config: ParserConfig = serde_json::from_str(r#"{"max_depth": 1000000}"#).unwrap();
    assert!(config.validate().is_err());

    let sql = format!("select {}", "(".repeat(200_000));
    let statements = Parser::with_config(&sql, 0, config).parse_all();
    assert_eq!(statements.len(), 1);
    assert!(statements[0].selects[0].fields[0].expr.has_placeholder());
    assert_well_formed(&sql, &statements);
}

#[test]
fn configured_parser_behaves_like_default_on_shallow_input() {
    let sql = "from t select (a + b) * c where d";
    let config = ParserConfig::new(8).unwrap();
    let configured = Parser::with_config(sql, 0, config).parse_all();
    let default = Parser::new(sql).parse_all();
    assert_eq!(configured, default);
}

#[test]
fn statement_serializes_to_json() {
    let sql = "select a";
    let statement = parse_single(sql);
    let value = serde_json::to_value(&statement).unwrap();
    assert_eq!(value["span"], json!({"start": 0, "end": 8}));
    assert_eq!(
        value["selects"][0]["keyword"],
        json!({"kind": {"Keyword": "Select"}, "span": {"start": 0, "end": 6}})
    );
    assert_eq!(
        value["selects"][0]["fields"][0]["expr"],
        json!({"Value": {"kind": "Identifier", "span": {"start": 7, "end": 8}}})
    );
    assert_eq!(value["unknowns"], json!([]));
}

#[test]
fn placeholder_serializes_with_its_text() {
    let sql = "where";
    let statement = parse_single(sql);
    let value = serde_json::to_value(&statement.wheres[0].expr).unwrap();
    assert_eq!(value, json!({"Placeholder": "1"}));
}
