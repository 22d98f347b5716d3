//! Stream media type classification.
//!
//! [`MediaType`] mirrors FFmpeg's `AVMediaType` enumeration, which classifies
//! each elementary stream as video, audio, data, subtitle, or attachment.
//! Conversion from a raw integer is total: any value outside the known set
//! maps to [`MediaType::Unknown`] rather than failing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// General category of an elementary stream, matching FFmpeg's `AVMediaType`
/// values.
///
/// Serialized as its raw integer value so JSON output mirrors the native
/// field verbatim; use [`MediaType::name`] for the display string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum MediaType {
    /// Stream type could not be determined.
    #[default]
    Unknown = -1,
    /// Video stream.
    Video = 0,
    /// Audio stream.
    Audio = 1,
    /// Opaque data stream (usually continuous).
    Data = 2,
    /// Subtitle stream.
    Subtitle = 3,
    /// Attached file (fonts, cover art).
    Attachment = 4,
    /// Number of defined media types, kept for parity with the native enum.
    Nb = 5,
}

impl MediaType {
    /// Convert a raw `AVMediaType` value. Out-of-range values, including
    /// negatives other than -1, yield [`MediaType::Unknown`].
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => MediaType::Video,
            1 => MediaType::Audio,
            2 => MediaType::Data,
            3 => MediaType::Subtitle,
            4 => MediaType::Attachment,
            5 => MediaType::Nb,
            _ => MediaType::Unknown,
        }
    }

    /// The canonical uppercase name, e.g. `"VIDEO"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MediaType::Unknown => "UNKNOWN",
            MediaType::Video => "VIDEO",
            MediaType::Audio => "AUDIO",
            MediaType::Data => "DATA",
            MediaType::Subtitle => "SUBTITLE",
            MediaType::Attachment => "ATTACHMENT",
            MediaType::Nb => "NB",
        }
    }
}

impl From<i32> for MediaType {
    fn from(raw: i32) -> Self {
        MediaType::from_raw(raw)
    }
}

impl From<MediaType> for i32 {
    fn from(media_type: MediaType) -> Self {
        media_type as i32
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use ffmpeg_sys_next::AVMediaType;

    use super::MediaType;

    #[test]
    fn known_values_map_to_documented_names() {
        let cases = [
            (-1, "UNKNOWN"),
            (0, "VIDEO"),
            (1, "AUDIO"),
            (2, "DATA"),
            (3, "SUBTITLE"),
            (4, "ATTACHMENT"),
            (5, "NB"),
        ];
        for (raw, want) in cases {
            assert_eq!(MediaType::from_raw(raw).name(), want, "raw {raw}");
        }
    }

    #[test]
    fn out_of_range_values_are_unknown() {
        assert_eq!(MediaType::from_raw(99).name(), "UNKNOWN");
        assert_eq!(MediaType::from_raw(-2).name(), "UNKNOWN");
        assert_eq!(MediaType::from_raw(i32::MIN).name(), "UNKNOWN");
        assert_eq!(MediaType::from_raw(i32::MAX).name(), "UNKNOWN");
    }

    #[test]
    fn values_match_native_enum() {
        assert_eq!(
            MediaType::from_raw(AVMediaType::AVMEDIA_TYPE_VIDEO as i32),
            MediaType::Video
        );
        assert_eq!(
            MediaType::from_raw(AVMediaType::AVMEDIA_TYPE_AUDIO as i32),
            MediaType::Audio
        );
        assert_eq!(
            MediaType::from_raw(AVMediaType::AVMEDIA_TYPE_SUBTITLE as i32),
            MediaType::Subtitle
        );
        assert_eq!(
            MediaType::from_raw(AVMediaType::AVMEDIA_TYPE_ATTACHMENT as i32),
            MediaType::Attachment
        );
        assert_eq!(
            MediaType::from_raw(AVMediaType::AVMEDIA_TYPE_UNKNOWN as i32),
            MediaType::Unknown
        );
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(MediaType::Video.to_string(), "VIDEO");
        assert_eq!(MediaType::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn serde_uses_raw_integer() {
        let json = serde_json::to_string(&MediaType::Subtitle).unwrap();
        assert_eq!(json, "3");
        let back: MediaType = serde_json::from_str("-1").unwrap();
        assert_eq!(back, MediaType::Unknown);
        // Unmapped integers degrade to Unknown on the way in.
        let odd: MediaType = serde_json::from_str("42").unwrap();
        assert_eq!(odd, MediaType::Unknown);
    }
}
