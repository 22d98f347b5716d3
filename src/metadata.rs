//! Owned metadata records mirroring FFmpeg's container structures.
//!
//! These types are plain data: one [`ContainerInfo`] per probed file, one
//! [`StreamInfo`] per elementary stream, one [`CodecInfo`] per stream's codec
//! parameters. They are populated by [`MediaProbe::probe`](crate::MediaProbe::probe)
//! with an explicit field-by-field copy out of the native structures, hold no
//! native pointers, and never change after the probe returns.
//!
//! All types serialize to JSON with snake_case field names. Codec fields that
//! only apply to one stream category (audio channel data on a video stream,
//! say) stay at zero and are omitted from JSON; see the field docs on
//! [`CodecInfo`] for the exact omission set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{codec_id::CodecId, field_order::FieldOrder, media_type::MediaType};

/// Rational number as used by FFmpeg for time bases, aspect ratios, and
/// frame rates.
///
/// Displays as `"num:den"` (e.g. `"16:9"`); numerator and denominator are
/// carried verbatim, never reduced to lowest terms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational {
    /// Numerator.
    pub num: i32,
    /// Denominator.
    pub den: i32,
}

impl Rational {
    /// Build a rational from numerator and denominator.
    #[must_use]
    pub fn new(num: i32, den: i32) -> Self {
        Rational { num, den }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.num, self.den)
    }
}

/// Complete metadata for one probed media file, mirroring FFmpeg's
/// `AVFormatContext`.
///
/// Owns its stream list exclusively. Container `start_time` and `duration`
/// are exposed in milliseconds (the native microsecond values divided by
/// [`AV_TIME_BASE_MS`](crate::probe::AV_TIME_BASE_MS)); `file_size` and
/// `file_ext` come from a filesystem stat independent of FFmpeg.
///
/// # Example
///
/// ```no_run
/// use mediaprobe::MediaProbe;
///
/// let info = MediaProbe::probe("input.mp4")?;
/// println!("{} [{}] {}", info.filename, info.format_name, info.duration_text);
/// for stream in &info.streams {
///     println!("  #{} {}", stream.index, stream.codec_parameters.codec_id_text);
/// }
/// # Ok::<(), mediaprobe::ProbeError>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ContainerInfo {
    /// Base name of the media file (no directory components).
    pub filename: String,
    /// File extension without the leading dot, e.g. `"mp4"`. Empty when the
    /// path has no extension or the stat call failed.
    pub file_ext: String,
    /// File size in bytes; zero when the stat call failed.
    pub file_size: u64,
    /// Human-readable file size, e.g. `"1.50 MB"`.
    pub file_size_text: String,
    /// All streams in the container, in the order the demuxer reports them.
    pub streams: Vec<StreamInfo>,
    /// Start time of the container in milliseconds; zero when unknown.
    pub start_time: i64,
    /// Duration of the container in milliseconds; zero when unknown.
    pub duration: u64,
    /// Human-readable duration, e.g. `"1:01:01.001"`.
    pub duration_text: String,
    /// Total bitrate of the file in bits per second.
    pub bit_rate: u64,
    /// Short name of the container format, e.g. `"mov,mp4,m4a,3gp,3g2,mj2"`.
    pub format_name: String,
    /// Descriptive name of the container format, e.g. `"QuickTime / MOV"`.
    pub format_long_name: String,
}

/// Metadata for one elementary stream, mirroring FFmpeg's `AVStream`.
///
/// The stream `duration` is kept in stream time-base ticks exactly as the
/// demuxer reports it; `duration_text` is derived by converting those ticks
/// to milliseconds through [`StreamInfo::time_base`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct StreamInfo {
    /// Stream index within the container. Unique, ascending, and matching
    /// the container's declared order.
    pub index: i32,
    /// Format-specific stream id (e.g. the MPEG-TS PID); zero when the
    /// format has none.
    pub id: i32,
    /// Codec parameters for this stream.
    pub codec_parameters: CodecInfo,
    /// Unit of the stream's timestamps, in seconds per tick.
    pub time_base: Rational,
    /// Stream duration in time-base ticks, copied verbatim.
    pub duration: i64,
    /// Human-readable duration derived via the time base; `"0.000"` when the
    /// duration is unknown.
    pub duration_text: String,
    /// Sample aspect ratio; `0:1` when unknown.
    pub sample_aspect_ratio: Rational,
    /// Average frame rate; `0:0` when unknown.
    pub avg_frame_rate: Rational,
}

/// Codec parameters for one stream, mirroring FFmpeg's `AVCodecParameters`.
///
/// Which fields are meaningful depends on [`CodecInfo::codec_type`]: width,
/// height, aspect ratio, field order, the `color_*` fields, chroma location,
/// and `video_delay` apply to video streams; channel data, sample rate,
/// block align, frame size, padding, and preroll apply to audio streams.
/// Fields irrelevant to the stream's category stay at zero.
///
/// Category-specific and rarely-populated fields are omitted from JSON at
/// zero. The identity fields (`codec_type`, `codec_id`, `codec_tag`,
/// `format`, `bit_rate`, `profile`, `level`, `width`, `height`, the
/// rationals, the field order, and the `*_text` strings) are always present,
/// even at their zero values.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct CodecInfo {
    /// General category of the encoded data.
    pub codec_type: MediaType,
    /// Category as text, e.g. `"VIDEO"`.
    pub codec_type_text: String,
    /// Specific codec identifier.
    pub codec_id: CodecId,
    /// Codec as text, e.g. `"H264"`.
    pub codec_id_text: String,
    /// Additional codec information, as a four-character-code style integer.
    pub codec_tag: u32,
    /// Size of the codec extradata in bytes.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub extradata_size: i32,
    /// Number of entries in the coded side data.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub nb_coded_side_data: i32,
    /// Pixel format (video) or sample format (audio) as a raw integer.
    pub format: i32,
    /// Average bitrate of the encoded data in bits per second.
    pub bit_rate: i64,
    /// Bits per sample in the codewords.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub bits_per_coded_sample: i32,
    /// Number of valid bits in each output sample.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub bits_per_raw_sample: i32,
    /// Codec-specific profile the stream conforms to.
    pub profile: i32,
    /// Codec-specific level.
    pub level: i32,
    /// Video only: frame width in pixels.
    pub width: i32,
    /// Video only: frame height in pixels.
    pub height: i32,
    /// Video only: sample aspect ratio.
    pub sample_aspect_ratio: Rational,
    /// Video only: field order.
    pub field_order: FieldOrder,
    /// Field order as text, e.g. `"PROGRESSIVE"`.
    pub field_order_text: String,
    /// Video only: color range.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub color_range: i32,
    /// Video only: color primaries.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub color_primaries: i32,
    /// Video only: color transfer characteristic.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub color_trc: i32,
    /// Video only: YUV colorspace type.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub color_space: i32,
    /// Video only: location of chroma samples.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub chroma_location: i32,
    /// Video only: number of frames the decoder should delay.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub video_delay: i32,
    /// Audio only: channel layout bitmask for native-order layouts; zero for
    /// unspecified or custom layouts.
    #[serde(default, skip_serializing_if = "is_zero_u64")]
    pub channel_layout: u64,
    /// Audio only: number of audio channels.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub channels: i32,
    /// Audio only: sampling rate in Hz.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub sample_rate: i32,
    /// Audio only: block alignment in bytes.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub block_align: i32,
    /// Audio only: audio frame size in samples.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub frame_size: i32,
    /// Audio only: samples the decoder discards at the start.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub initial_padding: i32,
    /// Audio only: padding appended by the encoder at the end.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub trailing_padding: i32,
    /// Audio only: samples to skip after a discontinuity.
    #[serde(default, skip_serializing_if = "is_zero_i32")]
    pub seek_preroll: i32,
}

fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}

fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}
