//! Human-readable formatting helpers.
//!
//! Pure, total functions used to derive the `*_text` display fields of a
//! probe result. Byte counts use binary (1024-based) units and durations use
//! a compact `H:MM:SS.mmm` notation that hides leading zero components.

/// Format a byte count as a human-readable size.
///
/// Picks the largest unit among B, KB, MB, GB, and TB (binary, 1024-based)
/// for which the value is at least 1, and renders it with two decimal
/// places. Values below 1024 are rendered as a plain integer in bytes.
///
/// # Example
///
/// ```
/// use mediaprobe::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 B");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// assert_eq!(format_bytes(1_073_741_824), "1.00 GB");
/// ```
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;
    const TB: f64 = GB * 1024.0;

    // Round half away from zero at the hundredths place, then print with a
    // fixed two decimals. `{:.2}` alone banks to even, which disagrees with
    // the documented rounding at exact .005 boundaries.
    let round2 = |value: f64| (value * 100.0).round() / 100.0;

    let value = bytes as f64;
    if value >= TB {
        format!("{:.2} TB", round2(value / TB))
    } else if value >= GB {
        format!("{:.2} GB", round2(value / GB))
    } else if value >= MB {
        format!("{:.2} MB", round2(value / MB))
    } else if value >= KB {
        format!("{:.2} KB", round2(value / KB))
    } else {
        format!("{bytes} B")
    }
}

/// Format a duration in milliseconds as `H:MM:SS.mmm`.
///
/// The hours component is unbounded (a 24-hour duration renders as
/// `24:00:00.000`, not `0:00:00.000`) and is hidden when zero, as is the
/// minutes component when both hours and minutes are zero. Minutes and
/// seconds are zero-padded to two digits when shown; milliseconds are always
/// three digits.
///
/// # Example
///
/// ```
/// use mediaprobe::format_duration_ms;
///
/// assert_eq!(format_duration_ms(0), "0.000");
/// assert_eq!(format_duration_ms(61_500), "1:01.500");
/// assert_eq!(format_duration_ms(3_600_000), "1:00:00.000");
/// ```
#[must_use]
pub fn format_duration_ms(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let ms = ms % 3_600_000;
    let minutes = ms / 60_000;
    let ms = ms % 60_000;
    let seconds = ms / 1_000;
    let millis = ms % 1_000;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}.{millis:03}")
    } else if minutes > 0 {
        format!("{minutes}:{seconds:02}.{millis:03}")
    } else {
        format!("{seconds}.{millis:03}")
    }
}
