//! Reading typed values with defaults.
//!
//! Run with: cargo run --example typed_values

use ini_document::from_str;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_str(
        "[Service]\nport = 8080\nenabled = 1\nratio = 0.25\nstarted = 2024-01-15 10:30:00\n\
         endpoint = https://api.example.com/v1\nretries =\nname = worker\n",
    )?;

    println!("port     = {}", doc.get_path_i32("Service/port", 80)?);
    println!("enabled  = {}", doc.get_path_bool("Service/enabled", false)?);
    println!("ratio    = {}", doc.get_path_decimal("Service/ratio", 1.0)?);
    println!("started  = {:?}", doc.get_path_datetime("Service/started", None)?);
    println!("endpoint = {:?}", doc.get_path_url("Service/endpoint", None)?.map(String::from));

    // Empty and missing values use the default
    println!("retries  = {}", doc.get_path_i32("Service/retries", 3)?);
    println!("timeout  = {}", doc.get_path_i32("Service/timeout", 30)?);

    // A present but unconvertible value is an error, not the default
    match doc.get_path_i32("Service/name", 0) {
        Ok(v) => println!("name     = {}", v),
        Err(e) => println!("name     -> {}", e),
    }

    Ok(())
}
