//! Probe several media files and print a one-line summary per file.
//!
//! Usage:
//!   cargo run --example batch_probe -- <file> [<file> ...]

use mediaprobe::{MediaProbe, MediaType};

fn main() {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: batch_probe <file> [<file> ...]");
        std::process::exit(2);
    }

    for (path, result) in paths.iter().zip(MediaProbe::probe_many(&paths)) {
        match result {
            Ok(info) => {
                let video_streams = info
                    .streams
                    .iter()
                    .filter(|stream| stream.codec_parameters.codec_type == MediaType::Video)
                    .count();
                let audio_streams = info
                    .streams
                    .iter()
                    .filter(|stream| stream.codec_parameters.codec_type == MediaType::Audio)
                    .count();

                println!(
                    "{path}: {} [{}] {video_streams} video / {audio_streams} audio stream(s), {}",
                    info.duration_text, info.format_name, info.file_size_text,
                );
            }
            Err(error) => eprintln!("{path}: {error}"),
        }
    }
}
