use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qsvmark")]
#[command(about = "Batch video watermarker using Intel QSV encoders", long_about = None)]
pub struct Cli {
    /// Root directory to scan for video files
    #[arg(long, value_name = "DIR")]
    pub input_directory: Option<PathBuf>,

    /// Root directory outputs are mirrored under
    #[arg(long, value_name = "DIR")]
    pub output_directory: Option<PathBuf>,

    /// Suffix appended to each output filename stem
    #[arg(long)]
    pub output_suffix: Option<String>,

    /// Encoder quality, 0-51 (lower is better)
    #[arg(long)]
    pub video_quality: Option<i32>,

    /// Video encoder: hevc_qsv or h264_qsv
    #[arg(long)]
    pub video_codec: Option<String>,

    /// Overlay text size
    #[arg(long)]
    pub font_size: Option<u32>,

    /// Overlay text color
    #[arg(long)]
    pub font_color: Option<String>,

    /// Font file used by the drawtext filter
    #[arg(long, value_name = "FILE")]
    pub font_file: Option<PathBuf>,

    /// Target bitrate (e.g. 4M); replaces quality-based rate control
    #[arg(long)]
    pub bitrate: Option<String>,

    /// Overlay text
    #[arg(long)]
    pub watermark_text: Option<String>,

    /// Additional ffmpeg arguments, shell-quoted as one string
    #[arg(long, value_name = "ARGS")]
    pub extra_args: Option<String>,

    /// Abort the batch on the first ffmpeg failure
    #[arg(long)]
    pub fail_fast: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check if ffmpeg is installed
    CheckFfmpeg,

    /// Scan the input directory and list jobs without encoding
    Scan,

    /// Show ffmpeg commands without executing (dry run)
    DryRun,

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
