// Discovery and output-path mirroring over a real directory tree

use qsvmark::engine::{build_job_queue, derive_output_path, ensure_output_directory, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"fake video").unwrap();
}

#[test]
fn scan_finds_only_lowercase_video_extensions() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    touch(&root.join("a.mp4"));
    touch(&root.join("b.MP4"));
    touch(&root.join("c.txt"));

    let found = scan(root).unwrap();
    assert_eq!(found, vec![root.join("a.mp4")]);
}

#[test]
fn scan_descends_into_subdirectories() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    touch(&root.join("top.mkv"));
    touch(&root.join("season1/ep1.mp4"));
    touch(&root.join("season1/extras/bloopers.webm"));
    touch(&root.join("season1/notes.md"));

    let mut found = scan(root).unwrap();
    found.sort();

    assert_eq!(
        found,
        vec![
            root.join("season1/ep1.mp4"),
            root.join("season1/extras/bloopers.webm"),
            root.join("top.mkv"),
        ]
    );
}

#[test]
fn scan_of_empty_tree_is_empty_not_error() {
    let dir = TempDir::new().unwrap();
    assert!(scan(dir.path()).unwrap().is_empty());
}

#[test]
fn output_paths_mirror_the_input_tree() {
    let dir = TempDir::new().unwrap();
    let input_root = dir.path().join("In");
    let output_root = dir.path().join("Out");

    touch(&input_root.join("sub/clip.mov"));

    let files = scan(&input_root).unwrap();
    let jobs = build_job_queue(files, &input_root, &output_root, "wm");

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].relative_path, Path::new("sub/clip.mov"));
    assert_eq!(jobs[0].output_path, output_root.join("sub/clip_wm.mov"));
}

#[test]
fn output_parent_directories_are_created_on_demand() {
    let dir = TempDir::new().unwrap();
    let output_path = derive_output_path(
        Path::new("In/a/b/clip.mp4"),
        Path::new("In"),
        &dir.path().join("Out"),
        "wm",
    );

    let parent = output_path.parent().unwrap();
    ensure_output_directory(parent).unwrap();
    assert!(parent.is_dir());

    // Repeating the call for the next file in the same directory is fine
    ensure_output_directory(parent).unwrap();
}
