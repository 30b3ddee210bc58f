use super::types::WatermarkJob;
use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Video file extensions the scanner picks up. Matching is
/// case-sensitive, so `clip.MP4` is not a match.
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mkv", "mov", "wmv", "flv", "ts", "vob", "webm", "3gp", "m4v", "rmvb",
];

/// Check if a path has a video file extension
pub fn is_video_file(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => VIDEO_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Scan a directory recursively for video files and invoke a callback for each file found
pub fn scan_streaming<F>(root: &Path, mut on_file: F) -> Result<()>
where
    F: FnMut(PathBuf),
{
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_video_file(path) {
            on_file(path.to_path_buf());
        }
    }

    Ok(())
}

/// Scan a directory recursively for video files
pub fn scan(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    scan_streaming(root, |path| files.push(path))?;
    Ok(files)
}

/// Mirror `input_path` under `output_root`: keep its directory structure
/// relative to `input_root` and insert `_{suffix}` before the extension.
pub fn derive_output_path(
    input_path: &Path,
    input_root: &Path,
    output_root: &Path,
    suffix: &str,
) -> PathBuf {
    let relative = input_path.strip_prefix(input_root).unwrap_or(input_path);

    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let file_name = match relative.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext),
        None => format!("{}_{}", stem, suffix),
    };

    match relative.parent() {
        Some(parent) => output_root.join(parent).join(file_name),
        None => output_root.join(file_name),
    }
}

/// Build one job from a scanned file
pub fn build_job(
    input_path: PathBuf,
    input_root: &Path,
    output_root: &Path,
    suffix: &str,
) -> WatermarkJob {
    let relative_path = input_path
        .strip_prefix(input_root)
        .unwrap_or(&input_path)
        .to_path_buf();
    let output_path = derive_output_path(&input_path, input_root, output_root, suffix);

    WatermarkJob::new(input_path, relative_path, output_path)
}

/// Build the job queue from scanned files, in discovery order
pub fn build_job_queue(
    files: Vec<PathBuf>,
    input_root: &Path,
    output_root: &Path,
    suffix: &str,
) -> Vec<WatermarkJob> {
    files
        .into_iter()
        .map(|input_path| build_job(input_path, input_root, output_root, suffix))
        .collect()
}
