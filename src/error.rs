//! Error types for the `mediaprobe` crate.
//!
//! This module defines [`ProbeError`], the unified error type returned by all
//! fallible operations in the crate. Errors carry enough context to diagnose
//! the problem without additional logging at the call site.

use std::path::PathBuf;

use ffmpeg_next::Error as FfmpegError;
use thiserror::Error;

/// The unified error type for all `mediaprobe` operations.
///
/// Every public method that can fail returns `Result<T, ProbeError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProbeError {
    /// The media file could not be opened or parsed by the demuxer.
    #[error("Failed to open media file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::MediaProbe::probe`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),

    /// Serializing a probe result to JSON failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FfmpegError> for ProbeError {
    fn from(error: FfmpegError) -> Self {
        ProbeError::Ffmpeg(error.to_string())
    }
}
