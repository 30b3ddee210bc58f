//! Fail-fast parameter checks that run before any file is touched.

use super::options::EncodeOptions;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Encoders the QSV pipeline supports
pub const ALLOWED_CODECS: &[&str] = &["hevc_qsv", "h264_qsv"];

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("video quality {0} is out of range (must be 0-51)")]
    InvalidQuality(i32),

    #[error("video codec '{0}' is not supported (expected hevc_qsv or h264_qsv)")]
    UnsupportedCodec(String),

    #[error("font file not found: {0}")]
    FontNotFound(String),
}

pub fn validate_quality(quality: i32) -> Result<(), ValidationError> {
    if !(0..=51).contains(&quality) {
        return Err(ValidationError::InvalidQuality(quality));
    }
    Ok(())
}

pub fn validate_codec(codec: &str) -> Result<(), ValidationError> {
    if !ALLOWED_CODECS.contains(&codec) {
        return Err(ValidationError::UnsupportedCodec(codec.to_string()));
    }
    Ok(())
}

pub fn ensure_font_exists(font_file: &Path) -> Result<(), ValidationError> {
    if !font_file.exists() {
        return Err(ValidationError::FontNotFound(
            font_file.display().to_string(),
        ));
    }
    Ok(())
}

/// Check every user-supplied parameter. Pure checks only; the caller
/// owns exit policy and directory creation.
pub fn validate_options(opts: &EncodeOptions) -> Result<(), ValidationError> {
    validate_quality(opts.video_quality)?;
    validate_codec(&opts.video_codec)?;
    ensure_font_exists(&opts.font_file)?;
    Ok(())
}

/// Create a directory and any missing parents. Idempotent.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create output directory: {}", path.display()))
}
