use std::path::PathBuf;

/// Rate-control mode for the encoder. Quality and bitrate are mutually
/// exclusive: they fill the same slot in the argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum RateControl {
    Quality(i32),
    Bitrate(String),
}

/// Resolved options for one batch run. Built once from the config file
/// and CLI input, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub input_directory: PathBuf,
    pub output_directory: PathBuf,
    pub output_suffix: String,
    pub video_quality: i32,
    pub video_codec: String,
    pub font_size: u32,
    pub font_color: String,
    pub font_file: PathBuf,
    /// Target bitrate; unset or empty means quality-based rate control
    pub bitrate: Option<String>,
    pub watermark_text: String,
    /// Extra ffmpeg arguments, shell-quoted as one string
    pub extra_args: String,
    pub fail_fast: bool,
}

impl EncodeOptions {
    pub fn rate_control(&self) -> RateControl {
        match &self.bitrate {
            Some(b) if !b.is_empty() => RateControl::Bitrate(b.clone()),
            _ => RateControl::Quality(self.video_quality),
        }
    }
}
