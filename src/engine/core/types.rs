use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum JobStatus {
    Pending,
    Running,
    Done,
    Failed,
}

/// One discovered video plus its mirrored output location.
#[derive(Debug, Clone)]
pub struct WatermarkJob {
    pub input_path: PathBuf,
    /// Path relative to the input root, preserved in the output tree
    pub relative_path: PathBuf,
    pub output_path: PathBuf,
    pub status: JobStatus,
    pub last_error: Option<String>,
}

impl WatermarkJob {
    /// Create a new pending job
    pub fn new(input_path: PathBuf, relative_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            relative_path,
            output_path,
            status: JobStatus::Pending,
            last_error: None,
        }
    }
}
