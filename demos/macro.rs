//! Building values with the lua! macro.
//!
//! Run with: cargo run --example macro

use serde_luat::{lua, to_string, Table, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = lua!({
        "name" => "server",
        "ports" => [8080, 8443],
        "tls" => { "enabled" => true, "ciphers" => nil }
    });
    println!("{}\n", to_string(&config)?);

    // Tables are handles: mutate after construction
    if let Value::Table(table) = &config {
        table.set("workers", 4);
        table.set(1, "first positional entry");
    }
    println!("{}\n", to_string(&config)?);

    let raw = Table::from_sequence(vec![Value::from(vec![0xde_u8, 0xad, 0xbe, 0xef])]);
    println!("{}", to_string(&Value::Table(raw))?);

    Ok(())
}
