//! Native media probing.
//!
//! [`MediaProbe`] opens a file through FFmpeg's demuxer, copies the
//! container, stream, and codec parameter fields into owned
//! [`ContainerInfo`] records, and closes the demuxer before returning. The
//! native context is scoped to the call: the wrapper's input context runs
//! `avformat_close_input` in its `Drop` on every exit path, and no pointer
//! derived from it survives past the return.
//!
//! One probe call is one open/parse/copy/close cycle. Calls share no state,
//! so independent probes may run concurrently from multiple threads; FFmpeg
//! permits concurrent use of separate format contexts, and library
//! initialisation is serialised by `ffmpeg_next::init`.

use std::{fs, path::Path};

use ffmpeg_sys_next::{
    AV_NOPTS_VALUE, AVChannelOrder, AVCodecParameters, AVRational, AVStream,
};

use crate::{
    error::ProbeError,
    format::{format_bytes, format_duration_ms},
    metadata::{CodecInfo, ContainerInfo, Rational, StreamInfo},
};

/// Microseconds per millisecond, as a divisor for `AV_TIME_BASE` units.
///
/// FFmpeg reports container durations and start times in `AV_TIME_BASE`
/// units (microseconds). [`ContainerInfo`] exposes them in milliseconds;
/// this constant is the only rescaling applied.
pub const AV_TIME_BASE_MS: i64 = (ffmpeg_sys_next::AV_TIME_BASE as i64) / 1000;

/// Lightweight media file probe.
///
/// Opens the file, copies every documented container/stream/codec field into
/// owned records, and immediately closes the demuxer. The returned
/// [`ContainerInfo`] holds no native handles and may outlive the probe call
/// indefinitely.
///
/// # Example
///
/// ```no_run
/// use mediaprobe::MediaProbe;
///
/// let info = MediaProbe::probe("input.mp4")?;
/// println!("{} streams, {}", info.streams.len(), info.duration_text);
/// # Ok::<(), mediaprobe::ProbeError>(())
/// ```
pub struct MediaProbe;

impl MediaProbe {
    /// Probe a media file and return its container metadata.
    ///
    /// Opens the file via FFmpeg, enumerates its streams in declared order,
    /// copies the codec parameters of each, merges file size and extension
    /// from an independent filesystem stat, and closes the demuxer. A failed
    /// stat degrades `file_size` to zero and `file_ext` to empty without
    /// failing the probe.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::FileOpen`] if the file cannot be opened or
    /// recognised as a media container. No partial result is produced.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mediaprobe::MediaProbe;
    ///
    /// let info = MediaProbe::probe("video.mkv")?;
    /// for stream in &info.streams {
    ///     println!("#{}: {}", stream.index, stream.codec_parameters.codec_id_text);
    /// }
    /// # Ok::<(), mediaprobe::ProbeError>(())
    /// ```
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<ContainerInfo, ProbeError> {
        let path = path.as_ref();
        let display_path = path.to_path_buf();

        log::debug!("Probing media file: {}", display_path.display());

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| ProbeError::FileOpen {
            path: display_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| ProbeError::FileOpen {
                path: display_path.clone(),
                reason: error.to_string(),
            })?;

        let mut streams = Vec::with_capacity(input_context.nb_streams() as usize);
        for stream in input_context.streams() {
            // SAFETY: the stream pointer is valid while `input_context` is
            // alive, and `codecpar` is allocated by the demuxer for every
            // stream. Both are only read here and copied into owned records
            // before the context is dropped.
            let raw_stream = unsafe { &*stream.as_ptr() };
            let raw_par = unsafe { &*raw_stream.codecpar };
            streams.push(StreamInfo::from_raw(raw_stream, raw_par));
        }

        let duration = container_duration_ms(input_context.duration());
        let bit_rate = input_context.bit_rate().max(0) as u64;
        // SAFETY: the context pointer is valid until `input_context` drops;
        // start_time is a plain numeric field not exposed by the safe API.
        let start_time = container_start_ms(unsafe { (*input_context.as_ptr()).start_time });

        let format_name = input_context.format().name().to_string();
        let format_long_name = input_context.format().description().to_string();

        // Demuxer closes here; everything below is owned data.
        drop(input_context);

        let (file_size, file_ext) = stat_path(path);
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::debug!(
            "Probed {} stream(s) from {}",
            streams.len(),
            display_path.display()
        );

        Ok(ContainerInfo {
            filename,
            file_ext,
            file_size,
            file_size_text: format_bytes(file_size),
            streams,
            start_time,
            duration,
            duration_text: format_duration_ms(duration),
            bit_rate,
            format_name,
            format_long_name,
        })
    }

    /// Probe multiple media files.
    ///
    /// Files that cannot be probed produce an `Err` entry in the result
    /// vector rather than aborting the entire batch.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mediaprobe::MediaProbe;
    ///
    /// for result in MediaProbe::probe_many(&["a.mp4", "b.mkv", "c.avi"]) {
    ///     match result {
    ///         Ok(info) => println!("{}: {}", info.filename, info.duration_text),
    ///         Err(err) => eprintln!("Error: {err}"),
    ///     }
    /// }
    /// ```
    pub fn probe_many<P: AsRef<Path>>(paths: &[P]) -> Vec<Result<ContainerInfo, ProbeError>> {
        paths.iter().map(|path| Self::probe(path)).collect()
    }
}

impl Rational {
    /// Copy a native `AVRational` verbatim.
    pub(crate) fn from_av(rational: AVRational) -> Self {
        Rational {
            num: rational.num,
            den: rational.den,
        }
    }
}

impl CodecInfo {
    /// Copy every documented field out of a native `AVCodecParameters`.
    ///
    /// Enum-typed fields are carried as raw integers with derived `*_text`
    /// companions; nothing else is transformed.
    pub(crate) fn from_codecpar(par: &AVCodecParameters) -> Self {
        let codec_type = crate::MediaType::from_raw(par.codec_type as i32);
        let codec_id = crate::CodecId::from_raw(par.codec_id as i32);
        let field_order = crate::FieldOrder::from_raw(par.field_order as i32);

        // FFmpeg 7 replaced the flat channel count/mask pair with
        // AVChannelLayout. The mask is only meaningful for native-order
        // layouts; unspecified and custom layouts report zero.
        let channels = par.ch_layout.nb_channels;
        let channel_layout = if par.ch_layout.order == AVChannelOrder::AV_CHANNEL_ORDER_NATIVE {
            // SAFETY: the union holds the mask variant for native order.
            unsafe { par.ch_layout.u.mask }
        } else {
            0
        };

        CodecInfo {
            codec_type,
            codec_type_text: codec_type.name().to_string(),
            codec_id,
            codec_id_text: codec_id.name().to_string(),
            codec_tag: par.codec_tag,
            extradata_size: par.extradata_size,
            nb_coded_side_data: par.nb_coded_side_data,
            format: par.format,
            bit_rate: par.bit_rate,
            bits_per_coded_sample: par.bits_per_coded_sample,
            bits_per_raw_sample: par.bits_per_raw_sample,
            profile: par.profile,
            level: par.level,
            width: par.width,
            height: par.height,
            sample_aspect_ratio: Rational::from_av(par.sample_aspect_ratio),
            field_order,
            field_order_text: field_order.name().to_string(),
            color_range: par.color_range as i32,
            color_primaries: par.color_primaries as i32,
            color_trc: par.color_trc as i32,
            color_space: par.color_space as i32,
            chroma_location: par.chroma_location as i32,
            video_delay: par.video_delay,
            channel_layout,
            channels,
            sample_rate: par.sample_rate,
            block_align: par.block_align,
            frame_size: par.frame_size,
            initial_padding: par.initial_padding,
            trailing_padding: par.trailing_padding,
            seek_preroll: par.seek_preroll,
        }
    }
}

impl StreamInfo {
    /// Copy every documented field out of a native `AVStream` and its codec
    /// parameters.
    ///
    /// `duration` stays in time-base ticks exactly as reported;
    /// `duration_text` converts the ticks to milliseconds through the
    /// stream's own time base.
    pub(crate) fn from_raw(stream: &AVStream, par: &AVCodecParameters) -> Self {
        let time_base = Rational::from_av(stream.time_base);
        let duration_text = format_duration_ms(stream_duration_ms(stream.duration, time_base));

        StreamInfo {
            index: stream.index,
            id: stream.id,
            codec_parameters: CodecInfo::from_codecpar(par),
            time_base,
            duration: stream.duration,
            duration_text,
            sample_aspect_ratio: Rational::from_av(stream.sample_aspect_ratio),
            avg_frame_rate: Rational::from_av(stream.avg_frame_rate),
        }
    }
}

/// Container duration in milliseconds; unknown or negative durations
/// collapse to zero.
fn container_duration_ms(raw: i64) -> u64 {
    if raw == AV_NOPTS_VALUE || raw <= 0 {
        0
    } else {
        (raw / AV_TIME_BASE_MS) as u64
    }
}

/// Container start time in milliseconds; may legitimately be negative.
/// Unknown start times collapse to zero.
fn container_start_ms(raw: i64) -> i64 {
    if raw == AV_NOPTS_VALUE {
        0
    } else {
        raw / AV_TIME_BASE_MS
    }
}

/// Convert a stream duration in time-base ticks to milliseconds.
///
/// Unknown, negative, or inconvertible (zero-denominator) durations yield
/// zero. The intermediate product uses 128-bit arithmetic so large tick
/// counts against fine time bases cannot overflow.
fn stream_duration_ms(duration: i64, time_base: Rational) -> u64 {
    if duration == AV_NOPTS_VALUE || duration <= 0 || time_base.den == 0 {
        return 0;
    }
    let ms =
        (duration as i128 * time_base.num as i128 * 1000) / time_base.den as i128;
    ms.max(0) as u64
}

/// File size and extension from a filesystem stat, independent of FFmpeg.
///
/// On stat failure both degrade to their defaults; the probe itself is not
/// affected.
fn stat_path(path: &Path) -> (u64, String) {
    match fs::metadata(path) {
        Ok(stat) => {
            let ext = path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default();
            (stat.len(), ext)
        }
        Err(error) => {
            log::warn!(
                "Could not stat {}: {error}; reporting zero size",
                path.display()
            );
            (0, String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use ffmpeg_sys_next::{
        AV_NOPTS_VALUE, AVChannelOrder, AVChromaLocation, AVCodecID, AVCodecParameters,
        AVColorPrimaries, AVColorRange, AVColorSpace, AVColorTransferCharacteristic,
        AVFieldOrder, AVMediaType, AVRational, AVStream,
    };

    use super::*;
    use crate::{CodecId, FieldOrder, MediaType};

    fn video_codecpar() -> AVCodecParameters {
        // SAFETY: a zeroed AVCodecParameters is a valid value: every enum
        // field has a defined zero variant and pointers are null (and never
        // dereferenced by the copy).
        let mut par: AVCodecParameters = unsafe { std::mem::zeroed() };
        par.codec_type = AVMediaType::AVMEDIA_TYPE_VIDEO;
        par.codec_id = AVCodecID::AV_CODEC_ID_H264;
        par.codec_tag = 0x3163_7661; // "avc1"
        par.extradata_size = 48;
        par.nb_coded_side_data = 2;
        par.format = 0;
        par.bit_rate = 4_000_000;
        par.bits_per_coded_sample = 24;
        par.bits_per_raw_sample = 8;
        par.profile = 100;
        par.level = 41;
        par.width = 1920;
        par.height = 1080;
        par.sample_aspect_ratio = AVRational { num: 1, den: 1 };
        par.field_order = AVFieldOrder::AV_FIELD_PROGRESSIVE;
        par.color_range = AVColorRange::AVCOL_RANGE_MPEG;
        par.color_primaries = AVColorPrimaries::AVCOL_PRI_BT709;
        par.color_trc = AVColorTransferCharacteristic::AVCOL_TRC_BT709;
        par.color_space = AVColorSpace::AVCOL_SPC_BT709;
        par.chroma_location = AVChromaLocation::AVCHROMA_LOC_LEFT;
        par.video_delay = 2;
        par
    }

    fn audio_codecpar() -> AVCodecParameters {
        // SAFETY: see video_codecpar.
        let mut par: AVCodecParameters = unsafe { std::mem::zeroed() };
        par.codec_type = AVMediaType::AVMEDIA_TYPE_AUDIO;
        par.codec_id = AVCodecID::AV_CODEC_ID_AAC;
        par.format = 8;
        par.bit_rate = 128_000;
        par.profile = 1;
        par.ch_layout.order = AVChannelOrder::AV_CHANNEL_ORDER_NATIVE;
        par.ch_layout.nb_channels = 2;
        par.ch_layout.u.mask = 0x3; // stereo
        par.sample_rate = 48_000;
        par.block_align = 4;
        par.frame_size = 1024;
        par.initial_padding = 1024;
        par.trailing_padding = 13;
        par.seek_preroll = 80;
        par
    }

    #[test]
    fn codecpar_copy_carries_every_video_field() {
        let info = CodecInfo::from_codecpar(&video_codecpar());

        assert_eq!(info.codec_type, MediaType::Video);
        assert_eq!(info.codec_type_text, "VIDEO");
        assert_eq!(info.codec_id, CodecId::from_raw(27));
        assert_eq!(info.codec_id_text, "H264");
        assert_eq!(info.codec_tag, 0x3163_7661);
        assert_eq!(info.extradata_size, 48);
        assert_eq!(info.nb_coded_side_data, 2);
        assert_eq!(info.format, 0);
        assert_eq!(info.bit_rate, 4_000_000);
        assert_eq!(info.bits_per_coded_sample, 24);
        assert_eq!(info.bits_per_raw_sample, 8);
        assert_eq!(info.profile, 100);
        assert_eq!(info.level, 41);
        assert_eq!(info.width, 1920);
        assert_eq!(info.height, 1080);
        assert_eq!(info.sample_aspect_ratio, Rational::new(1, 1));
        assert_eq!(info.field_order, FieldOrder::Progressive);
        assert_eq!(info.field_order_text, "PROGRESSIVE");
        assert_eq!(info.color_range, 1);
        assert_eq!(info.color_primaries, 1);
        assert_eq!(info.color_trc, 1);
        assert_eq!(info.color_space, 1);
        assert_eq!(info.chroma_location, 1);
        assert_eq!(info.video_delay, 2);
        // Audio-only fields stay at zero for a video stream.
        assert_eq!(info.channel_layout, 0);
        assert_eq!(info.channels, 0);
        assert_eq!(info.sample_rate, 0);
        assert_eq!(info.block_align, 0);
        assert_eq!(info.frame_size, 0);
        assert_eq!(info.initial_padding, 0);
        assert_eq!(info.trailing_padding, 0);
        assert_eq!(info.seek_preroll, 0);
    }

    #[test]
    fn codecpar_copy_carries_every_audio_field() {
        let info = CodecInfo::from_codecpar(&audio_codecpar());

        assert_eq!(info.codec_type, MediaType::Audio);
        assert_eq!(info.codec_type_text, "AUDIO");
        assert_eq!(info.codec_id_text, "AAC");
        assert_eq!(info.format, 8);
        assert_eq!(info.bit_rate, 128_000);
        assert_eq!(info.profile, 1);
        assert_eq!(info.channel_layout, 0x3);
        assert_eq!(info.channels, 2);
        assert_eq!(info.sample_rate, 48_000);
        assert_eq!(info.block_align, 4);
        assert_eq!(info.frame_size, 1024);
        assert_eq!(info.initial_padding, 1024);
        assert_eq!(info.trailing_padding, 13);
        assert_eq!(info.seek_preroll, 80);
        // Video-only fields stay at zero for an audio stream.
        assert_eq!(info.width, 0);
        assert_eq!(info.height, 0);
        assert_eq!(info.video_delay, 0);
        assert_eq!(info.field_order, FieldOrder::Unknown);
    }

    #[test]
    fn non_native_channel_order_reports_zero_mask() {
        // SAFETY: see video_codecpar.
        let mut par: AVCodecParameters = unsafe { std::mem::zeroed() };
        par.codec_type = AVMediaType::AVMEDIA_TYPE_AUDIO;
        par.ch_layout.order = AVChannelOrder::AV_CHANNEL_ORDER_UNSPEC;
        par.ch_layout.nb_channels = 6;

        let info = CodecInfo::from_codecpar(&par);
        assert_eq!(info.channels, 6);
        assert_eq!(info.channel_layout, 0);
    }

    #[test]
    fn zeroed_codecpar_maps_to_defined_fallbacks() {
        // SAFETY: see video_codecpar.
        let par: AVCodecParameters = unsafe { std::mem::zeroed() };
        let info = CodecInfo::from_codecpar(&par);

        assert_eq!(info.codec_type, MediaType::Video); // AVMEDIA_TYPE_VIDEO == 0
        assert_eq!(info.codec_id_text, "NONE");
        assert_eq!(info.field_order_text, "UNKNOWN");
        assert_eq!(info.bit_rate, 0);
        assert_eq!(info.sample_aspect_ratio, Rational::new(0, 0));
    }

    #[test]
    fn stream_copy_carries_every_field() {
        // SAFETY: a zeroed AVStream is valid for the same reasons as
        // AVCodecParameters; the copy never follows its pointers.
        let mut raw_stream: AVStream = unsafe { std::mem::zeroed() };
        raw_stream.index = 1;
        raw_stream.id = 0x101;
        raw_stream.time_base = AVRational { num: 1, den: 90_000 };
        raw_stream.duration = 900_000; // 10 seconds of 90 kHz ticks
        raw_stream.sample_aspect_ratio = AVRational { num: 4, den: 3 };
        raw_stream.avg_frame_rate = AVRational {
            num: 30_000,
            den: 1001,
        };

        let info = StreamInfo::from_raw(&raw_stream, &video_codecpar());

        assert_eq!(info.index, 1);
        assert_eq!(info.id, 0x101);
        assert_eq!(info.codec_parameters.codec_id_text, "H264");
        assert_eq!(info.time_base, Rational::new(1, 90_000));
        assert_eq!(info.duration, 900_000);
        assert_eq!(info.duration_text, "10.000");
        assert_eq!(info.sample_aspect_ratio, Rational::new(4, 3));
        assert_eq!(info.avg_frame_rate, Rational::new(30_000, 1001));
    }

    #[test]
    fn rational_copy_is_verbatim() {
        let rational = Rational::from_av(AVRational { num: 2, den: 4 });
        assert_eq!(rational, Rational::new(2, 4));
    }

    #[test]
    fn container_duration_handles_sentinels() {
        assert_eq!(container_duration_ms(AV_NOPTS_VALUE), 0);
        assert_eq!(container_duration_ms(-5), 0);
        assert_eq!(container_duration_ms(0), 0);
        assert_eq!(container_duration_ms(1_500_000), 1500);
        assert_eq!(container_duration_ms(AV_TIME_BASE_MS), 1);
    }

    #[test]
    fn container_start_keeps_sign() {
        assert_eq!(container_start_ms(AV_NOPTS_VALUE), 0);
        assert_eq!(container_start_ms(2_000_000), 2000);
        assert_eq!(container_start_ms(-500_000), -500);
    }

    #[test]
    fn stream_duration_converts_through_time_base() {
        assert_eq!(stream_duration_ms(900_000, Rational::new(1, 90_000)), 10_000);
        assert_eq!(
            stream_duration_ms(48_000 * 120, Rational::new(1, 48_000)),
            120_000
        );
        assert_eq!(stream_duration_ms(AV_NOPTS_VALUE, Rational::new(1, 1000)), 0);
        assert_eq!(stream_duration_ms(-1, Rational::new(1, 1000)), 0);
        assert_eq!(stream_duration_ms(500, Rational::new(1, 0)), 0);
        // Large tick counts against fine time bases must not overflow.
        assert_eq!(
            stream_duration_ms(i64::MAX / 2, Rational::new(1, 1_000_000_000)),
            (i64::MAX as u64 / 2) / 1_000_000
        );
    }

    #[test]
    fn stat_on_missing_path_degrades_to_defaults() {
        let (size, ext) = stat_path(Path::new("this_file_does_not_exist.mp4"));
        assert_eq!(size, 0);
        assert_eq!(ext, "");
    }

    #[test]
    fn stat_on_existing_path_reports_size_and_extension() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("clip.bin");
        std::fs::write(&path, b"12345").expect("Failed to write file");

        let (size, ext) = stat_path(&path);
        assert_eq!(size, 5);
        assert_eq!(ext, "bin");
    }
}
