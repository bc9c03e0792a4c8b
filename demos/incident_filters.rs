//! Date ranges, JSON operands and strict placement checks
//!
//! Run with `cargo run --example incident_filters`.
//! Set `ENCODED_QUERY_CONFIG` to point at a TOML file to change builder settings.

use encoded_query::prelude::*;

fn main() -> anyhow::Result<()> {
    let encoded = EncodedQuery::load()?;

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap();

    let first_quarter = encoded
        .builder()
        .field("opened_at")
        .between(start, end)?
        .and()
        .field("assignment_group")
        .is_not_empty()?
        .build()?;
    println!("Q1 assigned:  {}", first_quarter);

    let filter = json!({ "categories": ["network", "hardware"], "min_priority": 3 });
    let from_json = encoded
        .builder()
        .field("category")
        .equals(filter["categories"].clone())?
        .nq()
        .field("priority")
        .less_than_or_is(filter["min_priority"].clone())?
        .build()?;
    println!("From JSON:    {}", from_json);

    let strict = EncodedQuery::new(AppConfig {
        builder: BuilderConfig::new(HourClock::TwentyFour, SeparatorPolicy::Strict),
    });
    let dangling = strict.builder().field("active").equals("true")?.or().build();
    println!("Strict check: {:?}", dangling);

    Ok(())
}
