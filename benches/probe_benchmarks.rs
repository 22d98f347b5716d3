//! Benchmarks for probing, name lookup, and report formatting.
//!
//! Run with: cargo bench
//!
//! The probe benchmarks require a fixture file from
//! `tests/fixtures/generate_fixtures.sh`; the rest run without fixtures.

use std::hint::black_box;
use std::path::Path;

use criterion::Criterion;
use ffmpeg_next::util::log::Level as LogLevel;
use mediaprobe::{
    CodecId, CodecInfo, ContainerInfo, MediaProbe, MediaType, Rational, StreamInfo, format_bytes,
    format_duration_ms, report,
};

const SAMPLE_VIDEO: &str = "tests/fixtures/sample_video.mp4";

fn benchmark_probe(criterion: &mut Criterion) {
    ffmpeg_next::util::log::set_level(LogLevel::Error);

    if !Path::new(SAMPLE_VIDEO).exists() {
        eprintln!("Skipping benchmark: fixture not found");
        return;
    }

    criterion.bench_function("probe sample video", |bencher| {
        bencher.iter(|| {
            let _info = MediaProbe::probe(SAMPLE_VIDEO).unwrap();
        });
    });

    criterion.bench_function("probe and serialize", |bencher| {
        bencher.iter(|| {
            let info = MediaProbe::probe(SAMPLE_VIDEO).unwrap();
            let _json = report::to_json(&info).unwrap();
        });
    });
}

fn benchmark_codec_name_lookup(criterion: &mut Criterion) {
    criterion.bench_function("codec name lookup (hit)", |bencher| {
        bencher.iter(|| {
            let _name = CodecId::from_raw(black_box(27)).name();
        });
    });

    criterion.bench_function("codec name lookup (miss)", |bencher| {
        bencher.iter(|| {
            let _name = CodecId::from_raw(black_box(0x16000)).name();
        });
    });
}

fn benchmark_formatters(criterion: &mut Criterion) {
    criterion.bench_function("format_bytes", |bencher| {
        bencher.iter(|| {
            let _text = format_bytes(black_box(1_316_491_824));
        });
    });

    criterion.bench_function("format_duration_ms", |bencher| {
        bencher.iter(|| {
            let _text = format_duration_ms(black_box(3_723_456));
        });
    });
}

fn benchmark_report_serialization(criterion: &mut Criterion) {
    let info = ContainerInfo {
        filename: "bench.mp4".to_string(),
        file_ext: "mp4".to_string(),
        file_size: 1_310_720,
        file_size_text: format_bytes(1_310_720),
        streams: vec![
            StreamInfo {
                index: 0,
                codec_parameters: CodecInfo {
                    codec_type: MediaType::Video,
                    codec_type_text: "VIDEO".to_string(),
                    codec_id: CodecId::from_raw(27),
                    codec_id_text: "H264".to_string(),
                    width: 1920,
                    height: 1080,
                    ..CodecInfo::default()
                },
                time_base: Rational::new(1, 15_360),
                duration: 153_600,
                duration_text: format_duration_ms(10_000),
                ..StreamInfo::default()
            },
            StreamInfo {
                index: 1,
                codec_parameters: CodecInfo {
                    codec_type: MediaType::Audio,
                    codec_type_text: "AUDIO".to_string(),
                    codec_id: CodecId::from_raw(86018),
                    codec_id_text: "AAC".to_string(),
                    channels: 2,
                    sample_rate: 48_000,
                    ..CodecInfo::default()
                },
                time_base: Rational::new(1, 48_000),
                duration: 480_000,
                duration_text: format_duration_ms(10_000),
                ..StreamInfo::default()
            },
        ],
        start_time: 0,
        duration: 10_000,
        duration_text: format_duration_ms(10_000),
        bit_rate: 2_628_000,
        format_name: "mov,mp4,m4a,3gp,3g2,mj2".to_string(),
        format_long_name: "QuickTime / MOV".to_string(),
    };

    criterion.bench_function("serialize container report", |bencher| {
        bencher.iter(|| {
            let _json = report::to_json(black_box(&info)).unwrap();
        });
    });
}

criterion::criterion_group!(
    benches,
    benchmark_probe,
    benchmark_codec_name_lookup,
    benchmark_formatters,
    benchmark_report_serialization,
);
criterion::criterion_main!(benches);
