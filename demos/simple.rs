//! Parse, edit and re-render an INI document.
//!
//! Run with: cargo run --example simple

use ini_document::{from_str, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "\
; top comment
[A]
k1=v1
k2=v2=x
[B]
k3 = v3
";

    let mut doc = from_str(text)?;
    println!("Sections: {:?}", doc.section_names().collect::<Vec<_>>());
    println!("A/k2 = {:?}", doc.get_path("A/k2")?);

    // Lookups ignore case; writes create missing sections
    doc.set("b", "K3", "updated")?;
    doc.set("C", "new", "value")?;

    let rendered = to_string(&doc);
    println!("Rendered:\n{}", rendered);

    let back = from_str(&rendered)?;
    assert_eq!(back, doc);
    println!("✓ Round-trip successful");

    Ok(())
}
