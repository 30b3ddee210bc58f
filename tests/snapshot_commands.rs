use insta::assert_snapshot;
use qsvmark::engine::{EncodeOptions, WatermarkJob, build_watermark_cmd};
use std::path::PathBuf;

fn to_string(cmd: &std::process::Command) -> String {
    let mut parts = Vec::new();
    parts.push(cmd.get_program().to_string_lossy().to_string());
    parts.extend(
        cmd.get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect::<Vec<_>>(),
    );
    parts.join(" ")
}

fn mk_opts() -> EncodeOptions {
    EncodeOptions {
        input_directory: PathBuf::from("/tmp/in"),
        output_directory: PathBuf::from("/tmp/out"),
        output_suffix: "pinseclub".to_string(),
        video_quality: 18,
        video_codec: "hevc_qsv".to_string(),
        font_size: 30,
        font_color: "white".to_string(),
        font_file: PathBuf::from("./fonts/SimSun.ttf"),
        bitrate: None,
        watermark_text: "PINSE.CLUB".to_string(),
        extra_args: String::new(),
        fail_fast: false,
    }
}

fn mk_job() -> WatermarkJob {
    WatermarkJob::new(
        PathBuf::from("/tmp/in/input.mp4"),
        PathBuf::from("input.mp4"),
        PathBuf::from("/tmp/out/input_pinseclub.mp4"),
    )
}

#[test]
fn snapshot_quality_mode() {
    let cmd = build_watermark_cmd(&mk_job(), &mk_opts());
    assert_snapshot!("watermark_quality", to_string(&cmd));
}

#[test]
fn snapshot_bitrate_mode() {
    let mut opts = mk_opts();
    opts.bitrate = Some("4M".to_string());

    let cmd = build_watermark_cmd(&mk_job(), &opts);
    assert_snapshot!("watermark_bitrate", to_string(&cmd));
}
