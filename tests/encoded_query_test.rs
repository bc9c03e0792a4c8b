//! Integration tests for the public builder API
//!
//! Exercises full chains through the prelude the way host applications use it,
//! including configured builders and JSON operands.

use encoded_query::prelude::*;
use std::sync::Mutex;

// Tests that touch ENCODED_QUERY_CONFIG must not interleave
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_chain_with_question_mark() -> Result<(), EncodedQueryError> {
    let query = QueryBuilder::new()
        .field("priority")
        .equals(1)?
        .and()
        .field("state")
        .not_equals(6)?
        .build()?;

    assert_eq!(query, "priority=1^state!=6");
    Ok(())
}

#[test]
fn test_json_operands() -> Result<(), QueryError> {
    let payload = json!({
        "states": [1, 2, 3],
        "excluded": ["7", "8"],
        "caller": "abel.tuter",
    });

    let query = QueryBuilder::new()
        .field("state")
        .equals(payload["states"].clone())?
        .and()
        .field("close_code")
        .not_equals(payload["excluded"].clone())?
        .and()
        .field("caller_id")
        .equals(payload["caller"].clone())?
        .build()?;

    assert_eq!(query, "stateIN1,2,3^close_codeNOT IN7,8^caller_id=abel.tuter");
    Ok(())
}

#[test]
fn test_float_operands_from_json_payload() -> Result<(), QueryError> {
    let payload = json!({ "threshold": 4.0, "ratio": 0.25 });

    let query = QueryBuilder::new()
        .field("priority")
        .less_than(payload["threshold"].clone())?
        .and()
        .field("sla_ratio")
        .greater_than_or_is(payload["ratio"].clone())?
        .build()?;

    assert_eq!(query, "priority<4^sla_ratio>=0.25");
    Ok(())
}

#[test]
fn test_reexported_crates() {
    let at = encoded_query::chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let value = encoded_query::serde_json::Value::from("x");

    let query = QueryBuilder::new()
        .field("a")
        .equals(value)
        .unwrap()
        .and()
        .field("b")
        .less_than(at)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(query, "a=x^b<2024-01-01 00:00:00");
}

#[test]
fn test_object_operand_reports_object() {
    let err = QueryBuilder::new().field("state").equals(json!({})).unwrap_err();
    match err {
        QueryError::TypeMismatch { actual, .. } => assert_eq!(actual, "object"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_between_zoned_dates() -> Result<(), QueryError> {
    let tz = encoded_query::chrono::FixedOffset::west_opt(5 * 3600).unwrap();
    let start = tz.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap();
    let end = tz.with_ymd_and_hms(2024, 3, 31, 22, 30, 15).unwrap();

    let query = QueryBuilder::new()
        .field("opened_at")
        .between(start, end)?
        .build()?;

    assert_eq!(query, "opened_atBETWEEN2024-03-02 00:00:00@2024-04-01 03:30:15");
    Ok(())
}

#[test]
fn test_naive_and_zoned_dates_agree() -> Result<(), QueryError> {
    let naive = NaiveDate::from_ymd_opt(2024, 10, 1)
        .unwrap()
        .and_hms_opt(9, 5, 0)
        .unwrap();
    let zoned = Utc.from_utc_datetime(&naive);

    let from_naive = QueryBuilder::new().field("due").less_than(naive)?.build()?;
    let from_zoned = QueryBuilder::new().field("due").less_than(zoned)?.build()?;

    assert_eq!(from_naive, from_zoned);
    assert_eq!(from_naive, "due<2024-10-01 09:05:00");
    Ok(())
}

#[test]
fn test_configured_builder_from_toml() -> Result<(), EncodedQueryError> {
    let config = AppConfig::from_toml_str(
        r#"
        [builder]
        hour_clock = "twenty_four"
        separator_policy = "strict"
        "#,
    )?;
    let encoded = EncodedQuery::new(config);

    let malformed = encoded.builder().field("a").equals(1)?.and().build();
    assert!(matches!(malformed, Err(QueryError::MalformedQuery(_))));

    let query = encoded.builder().field("a").equals(1)?.build()?;
    assert_eq!(query, "a=1");
    Ok(())
}

#[test]
fn test_load_from_env_path() -> Result<(), EncodedQueryError> {
    let _guard = ENV_LOCK.lock().unwrap();
    let path = std::env::temp_dir().join(format!("encoded_query_it_{}.toml", std::process::id()));
    std::fs::write(&path, "[builder]\nhour_clock = \"twelve\"\n").unwrap();

    // SAFETY: ENV_LOCK serializes every test that touches the environment
    unsafe { std::env::set_var("ENCODED_QUERY_CONFIG", &path) };
    let loaded = EncodedQuery::load();
    unsafe { std::env::remove_var("ENCODED_QUERY_CONFIG") };
    std::fs::remove_file(&path).unwrap();

    let encoded = loaded?;
    assert_eq!(encoded.config().builder.hour_clock, HourClock::Twelve);

    let query = encoded
        .builder()
        .field("opened_at")
        .greater_than(Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap())?
        .build()?;
    assert_eq!(query, "opened_at>2024-01-01 01:00:00");
    Ok(())
}

#[test]
fn test_blank_env_path_is_invalid() {
    let _guard = ENV_LOCK.lock().unwrap();
    // SAFETY: ENV_LOCK serializes every test that touches the environment
    unsafe { std::env::set_var("ENCODED_QUERY_CONFIG", "  ") };
    let loaded = EncodedQuery::load();
    unsafe { std::env::remove_var("ENCODED_QUERY_CONFIG") };

    assert!(matches!(
        loaded,
        Err(EncodedQueryError::Config(ConfigError::Invalid(_)))
    ));
}
