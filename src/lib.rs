//! # mediaprobe
//!
//! Inspect media containers: stream layout, codec parameters, and
//! human-readable summaries, powered by FFmpeg via the
//! [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate.
//!
//! `mediaprobe` opens a file, copies every documented container, stream,
//! and codec parameter field into plain owned records, and closes the
//! native demuxer before returning. The records serialize to indented JSON
//! and carry precomputed human-readable companions (byte sizes, clock
//! durations, symbolic codec names) next to the raw values.
//!
//! ## Quick Start
//!
//! ### Probe a File
//!
//! ```no_run
//! use mediaprobe::MediaProbe;
//!
//! let info = MediaProbe::probe("input.mp4").unwrap();
//! println!(
//!     "{}: {} ({}, {})",
//!     info.filename, info.format_long_name, info.duration_text, info.file_size_text
//! );
//! ```
//!
//! ### Print a JSON Report
//!
//! ```no_run
//! use mediaprobe::{MediaProbe, report};
//!
//! let info = MediaProbe::probe("input.mp4").unwrap();
//! println!("{}", report::to_json(&info).unwrap());
//! ```
//!
//! ### Walk the Streams
//!
//! ```no_run
//! use mediaprobe::{MediaProbe, MediaType};
//!
//! let info = MediaProbe::probe("input.mkv").unwrap();
//! for stream in &info.streams {
//!     let codec = &stream.codec_parameters;
//!     match codec.codec_type {
//!         MediaType::Video => {
//!             println!("#{}: {} {}x{}", stream.index, codec.codec_id_text, codec.width, codec.height);
//!         }
//!         MediaType::Audio => {
//!             println!("#{}: {} {} Hz", stream.index, codec.codec_id_text, codec.sample_rate);
//!         }
//!         _ => println!("#{}: {}", stream.index, codec.codec_type_text),
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - **Container metadata** - format names, duration, start time, overall
//!   bit rate, and file size in one record
//! - **Stream enumeration** - every stream in declared order with its time
//!   base, duration, aspect ratio, and average frame rate
//! - **Codec parameters** - a complete field-by-field copy of the native
//!   parameter block: identifiers, geometry, color description, channel
//!   layout, padding, and more
//! - **Human-readable text** - byte sizes (`"1.27 MB"`) and clock durations
//!   (`"1:02:03.456"`) precomputed alongside the raw numbers
//! - **Symbolic names** - total codec, media-type, and field-order name
//!   lookups that fall back to `"UNKNOWN"` instead of failing
//! - **JSON reports** - indented `serde_json` output with stable snake_case
//!   keys
//! - **Batch probing** - probe many files and keep per-file errors isolated
//! - **FFmpeg console control** - tune or silence FFmpeg's own stderr output
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system. See the
//! README for platform-specific instructions.

pub mod codec_id;
pub mod error;
pub mod ffmpeg;
pub mod field_order;
pub mod format;
pub mod media_type;
pub mod metadata;
pub mod probe;
pub mod report;

pub use codec_id::CodecId;
pub use error::ProbeError;
pub use ffmpeg::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use field_order::FieldOrder;
pub use format::{format_bytes, format_duration_ms};
pub use media_type::MediaType;
pub use metadata::{CodecInfo, ContainerInfo, Rational, StreamInfo};
pub use probe::MediaProbe;
