//! JSON reporting for probe results.
//!
//! Serialization renders indented, human-readable JSON. Identity fields
//! (names, sizes, dimensions, codec identifiers) always appear, even at
//! zero; only the optional-parameter fields listed in
//! [`CodecInfo`](crate::CodecInfo) are dropped when unset.

use std::io::Write;

use serde::Serialize;

use crate::error::ProbeError;

/// Render any probe record as indented JSON.
///
/// # Errors
///
/// Returns [`ProbeError::Json`] if serialization fails.
///
/// # Example
///
/// ```no_run
/// use mediaprobe::{MediaProbe, report};
///
/// let info = MediaProbe::probe("input.mp4")?;
/// println!("{}", report::to_json(&info)?);
/// # Ok::<(), mediaprobe::ProbeError>(())
/// ```
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ProbeError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write a probe record as indented JSON to an arbitrary writer.
///
/// # Errors
///
/// Returns [`ProbeError::Json`] if serialization fails or the writer
/// rejects the output.
pub fn write_json<T: Serialize, W: Write>(value: &T, writer: W) -> Result<(), ProbeError> {
    Ok(serde_json::to_writer_pretty(writer, value)?)
}

/// Print a probe record as indented JSON to standard output, followed by a
/// newline.
///
/// # Errors
///
/// Returns [`ProbeError::Json`] if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), ProbeError> {
    println!("{}", to_json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ContainerInfo;

    #[test]
    fn to_json_is_indented() {
        let info = ContainerInfo {
            filename: "clip.mp4".to_string(),
            ..ContainerInfo::default()
        };

        let json = to_json(&info).expect("Failed to serialize container info");
        assert!(json.starts_with("{\n  \""));
        assert!(json.contains("\"filename\": \"clip.mp4\""));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn write_json_matches_to_json() {
        let info = ContainerInfo::default();

        let mut buffer = Vec::new();
        write_json(&info, &mut buffer).expect("Failed to write container info");

        let text = String::from_utf8(buffer).expect("Output was not UTF-8");
        assert_eq!(text, to_json(&info).expect("Failed to serialize"));
    }

    #[test]
    fn identity_fields_survive_at_zero() {
        let json = to_json(&ContainerInfo::default()).expect("Failed to serialize");
        for field in [
            "\"filename\"",
            "\"file_size\"",
            "\"duration\"",
            "\"bit_rate\"",
            "\"format_name\"",
            "\"streams\"",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }
}
