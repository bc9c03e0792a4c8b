//! Quick tour of the builder
//!
//! Run with `cargo run --example demo`.

use encoded_query::prelude::*;

fn main() -> anyhow::Result<()> {
    let open_p1 = QueryBuilder::new()
        .field("active")
        .equals("true")?
        .and()
        .field("priority")
        .equals(1)?
        .build()?;
    println!("Open P1 incidents:     {}", open_p1);

    let either_prefix = QueryBuilder::new()
        .field("number")
        .starts_with("INC")?
        .or()
        .starts_with("PRB")?
        .build()?;
    println!("Incidents or problems: {}", either_prefix);

    let sorted = QueryBuilder::new()
        .field("state")
        .is_one_of(vec![1, 2, 3])?
        .and()
        .field("sys_updated_on")
        .order_descending()
        .build()?;
    println!("Recently updated:      {}", sorted);

    match QueryBuilder::new().equals(1) {
        Ok(_) => unreachable!("condition without a field"),
        Err(err) => println!("Expected failure:      {}", err),
    }

    Ok(())
}
