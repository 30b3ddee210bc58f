use super::log::write_debug_log;
use super::options::{EncodeOptions, RateControl};
use super::types::{JobStatus, WatermarkJob};
use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Frames per watermark cycle
const WATERMARK_PERIOD: u32 = 2000;
/// Frames per cycle during which the text is visible
const WATERMARK_VISIBLE: u32 = 1200;

/// Escape a value for use inside a drawtext option. The filter parser
/// treats `\`, `'`, `:` and `,` specially.
pub fn escape_drawtext(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '\'' | ':' | ',') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Normalize a font path for the filter expression: drawtext wants
/// forward slashes even on Windows.
pub fn normalize_font_path(font_file: &Path) -> String {
    font_file.to_string_lossy().replace('\\', "/")
}

/// Build the drawtext filter. The text is visible for the first 1200
/// frames of every 2000-frame cycle and jumps to a random in-bounds
/// position on each cycle boundary, holding still in between.
pub fn drawtext_filter(opts: &EncodeOptions) -> String {
    let font_file = escape_drawtext(&normalize_font_path(&opts.font_file));
    let text = escape_drawtext(&opts.watermark_text);

    format!(
        "drawtext=fontcolor={}:fontsize={}:fontfile='{}':text='{}':\
         x='if(eq(mod(n\\,{p})\\,0)\\,rand(0\\,(w-text_w))\\,x)':\
         y='if(eq(mod(n\\,{p})\\,0)\\,rand(0\\,(h-text_h))\\,y)':\
         enable='lt(mod(n\\,{p})\\,{v})'",
        opts.font_color,
        opts.font_size,
        font_file,
        text,
        p = WATERMARK_PERIOD,
        v = WATERMARK_VISIBLE,
    )
}

/// Shell-style split of user-provided ffmpeg arguments so quoted strings
/// with spaces are preserved. Falls back to whitespace splitting on
/// unbalanced quotes.
fn split_extra_args(extra_args: &str) -> Vec<String> {
    match shlex::split(extra_args) {
        Some(args) => args,
        None => extra_args.split_whitespace().map(str::to_string).collect(),
    }
}

/// Flat ffmpeg argument list for one file. Order matters: the
/// rate-control pair fills a single slot between the encoder and the
/// audio options, and the list always ends with `-y <output>`.
pub fn watermark_args(job: &WatermarkJob, opts: &EncodeOptions) -> Vec<String> {
    let mut args = vec![
        "-hwaccel_output_format".to_string(),
        "qsv".to_string(),
        "-i".to_string(),
        job.input_path.to_string_lossy().into_owned(),
        "-vf".to_string(),
        drawtext_filter(opts),
        "-c:v".to_string(),
        opts.video_codec.clone(),
    ];

    match opts.rate_control() {
        RateControl::Quality(quality) => {
            args.push("-global_quality".to_string());
            args.push(quality.to_string());
        }
        RateControl::Bitrate(bitrate) => {
            args.push("-b:v".to_string());
            args.push(bitrate);
        }
    }

    args.push("-c:a".to_string());
    args.push("copy".to_string());

    if !opts.extra_args.is_empty() {
        args.extend(split_extra_args(&opts.extra_args));
    }

    args.push("-y".to_string());
    args.push(job.output_path.to_string_lossy().into_owned());

    args
}

/// Assemble the ffmpeg invocation for one job
pub fn build_watermark_cmd(job: &WatermarkJob, opts: &EncodeOptions) -> Command {
    let mut cmd = Command::new("ffmpeg");
    cmd.args(watermark_args(job, opts));
    cmd
}

/// Format the command as a shell-safe string for display
pub fn format_watermark_cmd(job: &WatermarkJob, opts: &EncodeOptions) -> String {
    let mut parts = vec!["ffmpeg".to_string()];
    for arg in watermark_args(job, opts) {
        if arg.contains(' ') {
            parts.push(format!("\"{}\"", arg));
        } else {
            parts.push(arg);
        }
    }
    parts.join(" ")
}

/// Run ffmpeg for one job, blocking until it exits. The child inherits
/// stdout/stderr so encoder output stays visible; the exit status is
/// recorded on the job either way.
pub fn encode_job(job: &mut WatermarkJob, opts: &EncodeOptions) -> Result<ExitStatus> {
    write_debug_log(&format!("running: {}", format_watermark_cmd(job, opts))).ok();

    job.status = JobStatus::Running;

    let status = build_watermark_cmd(job, opts)
        .status()
        .context("Failed to spawn ffmpeg. Is ffmpeg installed and in PATH?")?;

    if status.success() {
        job.status = JobStatus::Done;
    } else {
        job.status = JobStatus::Failed;
        job.last_error = Some(format!("ffmpeg exited with status: {}", status));
        write_debug_log(&format!(
            "failed: {} ({})",
            job.input_path.display(),
            status
        ))
        .ok();
    }

    Ok(status)
}
