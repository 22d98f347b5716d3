//! Probe a media file and print its JSON report.
//!
//! Usage:
//!   cargo run --example probe_file -- <input_file>

use std::error::Error;

use mediaprobe::{MediaProbe, report};

fn main() -> Result<(), Box<dyn Error>> {
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "input.mp4".to_string());

    let info = MediaProbe::probe(&input_path)?;

    println!("=== {} ===", info.filename);
    println!("Format:   {} ({})", info.format_name, info.format_long_name);
    println!("Duration: {}", info.duration_text);
    println!("Size:     {}", info.file_size_text);
    println!("Streams:  {}", info.streams.len());
    println!();
    report::print_json(&info)?;

    Ok(())
}
