use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use mediaprobe::{ContainerInfo, FfmpegLogLevel, MediaProbe, MediaType, report};

const CLI_AFTER_HELP: &str = "Examples:\n  mediaprobe probe input.mp4\n  mediaprobe probe input.mp4 --summary\n  mediaprobe probe a.mp4 b.mkv c.avi --progress\n  mediaprobe probe input.mp4 --log-level quiet\n  mediaprobe completions zsh > _mediaprobe";

#[derive(Debug, Parser)]
#[command(
    name = "mediaprobe",
    version,
    about = "Inspect media containers and print codec-level JSON reports",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Probe media files and print their metadata (alias: info).
    #[command(
        about = "Probe media files",
        visible_alias = "info",
        after_help = "Examples:\n  mediaprobe probe input.mp4\n  mediaprobe probe input.mp4 --summary\n  mediaprobe probe a.mp4 b.mkv --progress"
    )]
    Probe {
        /// Input media paths.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Print a short human-readable summary instead of JSON.
        #[arg(long)]
        summary: bool,

        /// Show a progress bar when probing multiple files.
        #[arg(long)]
        progress: bool,
    },

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "Examples:\n  mediaprobe completions bash > mediaprobe.bash\n  mediaprobe completions zsh > _mediaprobe"
    )]
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn parse_log_level(value: &str) -> Option<FfmpegLogLevel> {
    match value.to_ascii_lowercase().as_str() {
        "quiet" => Some(FfmpegLogLevel::Quiet),
        "panic" => Some(FfmpegLogLevel::Panic),
        "fatal" => Some(FfmpegLogLevel::Fatal),
        "error" => Some(FfmpegLogLevel::Error),
        "warning" | "warn" => Some(FfmpegLogLevel::Warning),
        "info" => Some(FfmpegLogLevel::Info),
        "verbose" => Some(FfmpegLogLevel::Verbose),
        "debug" => Some(FfmpegLogLevel::Debug),
        "trace" => Some(FfmpegLogLevel::Trace),
        _ => None,
    }
}

fn apply_global_options(global: &GlobalOptions) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(level) = &global.log_level {
        let parsed = parse_log_level(level).ok_or(format!("unsupported --log-level: {level}"))?;
        mediaprobe::set_ffmpeg_log_level(parsed);
    }

    Ok(())
}

fn print_summary(info: &ContainerInfo) {
    println!("{}", info.filename.bold());
    println!("  Format:   {} ({})", info.format_name, info.format_long_name);
    println!("  Duration: {}", info.duration_text);
    println!("  Size:     {}", info.file_size_text);
    println!("  Bitrate:  {} b/s", info.bit_rate);
    for stream in &info.streams {
        let codec = &stream.codec_parameters;
        match codec.codec_type {
            MediaType::Video => println!(
                "  #{} {}: {} {}x{}",
                stream.index, codec.codec_type_text, codec.codec_id_text, codec.width, codec.height
            ),
            MediaType::Audio => println!(
                "  #{} {}: {} {} Hz, {} ch",
                stream.index,
                codec.codec_type_text,
                codec.codec_id_text,
                codec.sample_rate,
                codec.channels
            ),
            _ => println!(
                "  #{} {}: {}",
                stream.index, codec.codec_type_text, codec.codec_id_text
            ),
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    apply_global_options(&cli.global)?;

    match cli.command {
        Commands::Probe {
            inputs,
            summary,
            progress,
        } => {
            let progress_bar = if progress && inputs.len() > 1 {
                let pb = ProgressBar::new(inputs.len() as u64);
                let style = ProgressStyle::with_template(
                    "{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}",
                )?;
                pb.set_style(style.progress_chars("##-"));
                Some(pb)
            } else {
                None
            };

            let mut failures = 0_usize;
            for input in &inputs {
                if let Some(pb) = &progress_bar {
                    pb.set_message(input.display().to_string());
                }

                match MediaProbe::probe(input) {
                    Ok(info) => {
                        if cli.global.verbose {
                            eprintln!(
                                "probed {} stream(s) from {}",
                                info.streams.len(),
                                input.display()
                            );
                        }
                        if summary {
                            print_summary(&info);
                        } else {
                            report::print_json(&info)?;
                        }
                    }
                    Err(error) => {
                        failures += 1;
                        eprintln!(
                            "{} {}",
                            "error:".red().bold(),
                            format!("{}: {error}", input.display()).red()
                        );
                    }
                }

                if let Some(pb) = &progress_bar {
                    pb.inc(1);
                }
            }

            if let Some(pb) = &progress_bar {
                pb.finish_and_clear();
            }

            if failures > 0 {
                return Err(
                    format!("{failures} of {} file(s) could not be probed", inputs.len()).into(),
                );
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "mediaprobe", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
