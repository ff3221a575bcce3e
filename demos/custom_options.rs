//! Customizing rendered output.
//!
//! Run with: cargo run --example custom_options

use ini_document::{ini, to_string_with_options, IniOptions, LineEnding};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = ini! {
        "Window" => { "width" => 1280, "height" => 720 },
        "Audio" => { "volume" => 0.8, "muted" => false },
    }?;
    doc.push_comment("; display settings")?;
    doc.section_mut("Audio")
        .ok_or("missing Audio section")?
        .push_comment("# volume is 0.0 - 1.0")?;

    println!("Default:\n{}", to_string_with_options(&doc, &IniOptions::new()));
    println!("Compact:\n{}", to_string_with_options(&doc, &IniOptions::compact()));
    println!(
        "Without comments:\n{}",
        to_string_with_options(&doc, &IniOptions::new().with_comments(false))
    );

    let crlf = IniOptions::new().with_line_ending(LineEnding::CrLf);
    let windows = to_string_with_options(&doc, &crlf);
    println!("CRLF output is {} bytes", windows.len());

    Ok(())
}
