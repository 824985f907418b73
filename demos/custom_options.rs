//! Customizing output with SerializeOptions.
//!
//! Run with: cargo run --example custom_options

use serde_luat::{
    contents_to_string_with_options, lua, to_string_with_options, SerializeOptions,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let data = lua!({
        "name" => "MyApp",
        "version" => "1.0.0",
        "flags" => ["debug", "trace"]
    });

    println!("Pretty:\n{}\n", to_string_with_options(&data, &SerializeOptions::new())?);
    println!("Minified:\n{}\n", to_string_with_options(&data, &SerializeOptions::minified())?);

    let shallow = SerializeOptions::new().with_max_depth(1);
    match to_string_with_options(&data, &shallow) {
        Ok(out) => println!("Depth 1:\n{}\n", out),
        Err(e) => println!("Depth 1 failed: {}\n", e),
    }

    // Splice a body into a hand-written constructor
    if let Some(table) = data.as_table() {
        let body = contents_to_string_with_options(table, &SerializeOptions::new())?;
        println!("return setmetatable({{{}}}, {{}})", body);
    }

    Ok(())
}
