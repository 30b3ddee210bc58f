mod ffmpeg_cmd;
mod ffmpeg_info;
mod log;
mod options;
mod scan;
mod types;
mod validate;

pub use ffmpeg_cmd::{
    build_watermark_cmd, drawtext_filter, encode_job, escape_drawtext, format_watermark_cmd,
    normalize_font_path, watermark_args,
};
pub use ffmpeg_info::ffmpeg_version;
pub use log::write_debug_log;
pub use options::{EncodeOptions, RateControl};
pub use scan::{
    build_job, build_job_queue, derive_output_path, is_video_file, scan, scan_streaming,
};
pub use types::{JobStatus, WatermarkJob};
pub use validate::{
    ALLOWED_CODECS, ValidationError, ensure_font_exists, ensure_output_directory, validate_codec,
    validate_options, validate_quality,
};
