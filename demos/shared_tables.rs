//! Shared and self-referencing tables.
//!
//! Run with: cargo run --example shared_tables

use serde_luat::{to_string, to_string_minified, Table, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A table reachable twice, without a cycle, is written twice
    let origin = Table::new();
    origin.set("x", 0);
    origin.set("y", 0);

    let segment = Table::new();
    segment.set("from", origin.clone());
    segment.set("to", origin);
    println!("{}\n", to_string(&Value::Table(segment))?);

    // A cycle is cut with nil
    let a = Table::new();
    let b = Table::new();
    a.set("name", "a");
    a.set("peer", b.clone());
    b.set("name", "b");
    b.set("peer", a.clone());
    println!("{}", to_string_minified(&Value::Table(a))?);

    Ok(())
}
