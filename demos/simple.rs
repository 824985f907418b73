//! Serializing Rust structs to Lua literals.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_luat::{to_string_from, SerializeOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    let lua = to_string_from(&users, &SerializeOptions::new())?;
    println!("return {}", lua);

    Ok(())
}
