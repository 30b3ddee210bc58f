use crate::cli::{Cli, Commands};
use qsvmark::engine::{EncodeOptions, JobStatus};
use qsvmark::{config, engine};
use std::process;

/// Merge CLI flags over the config file's persisted defaults.
fn resolve_options(cli: &Cli) -> EncodeOptions {
    let defaults = config::Config::load().unwrap_or_default().defaults;

    EncodeOptions {
        input_directory: cli
            .input_directory
            .clone()
            .unwrap_or(defaults.input_directory),
        output_directory: cli
            .output_directory
            .clone()
            .unwrap_or(defaults.output_directory),
        output_suffix: cli.output_suffix.clone().unwrap_or(defaults.output_suffix),
        video_quality: cli.video_quality.unwrap_or(defaults.video_quality),
        video_codec: cli.video_codec.clone().unwrap_or(defaults.video_codec),
        font_size: cli.font_size.unwrap_or(defaults.font_size),
        font_color: cli.font_color.clone().unwrap_or(defaults.font_color),
        font_file: cli.font_file.clone().unwrap_or(defaults.font_file),
        bitrate: cli.bitrate.clone().or(defaults.bitrate),
        watermark_text: cli
            .watermark_text
            .clone()
            .unwrap_or(defaults.watermark_text),
        extra_args: cli.extra_args.clone().unwrap_or(defaults.extra_args),
        fail_fast: cli.fail_fast || defaults.fail_fast,
    }
}

pub fn run(cli: Cli) {
    let opts = resolve_options(&cli);

    if let Some(command) = cli.command {
        match command {
            Commands::CheckFfmpeg => handle_check_ffmpeg(),
            Commands::Scan => handle_scan(&opts),
            Commands::DryRun => handle_dry_run(&opts),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    run_batch(&opts);
}

fn handle_check_ffmpeg() {
    match engine::ffmpeg_version() {
        Ok(version) => println!("ffmpeg found: {}", version),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_scan(opts: &EncodeOptions) {
    println!("Scanning directory: {}", opts.input_directory.display());

    match engine::scan(&opts.input_directory) {
        Ok(files) => {
            let jobs = engine::build_job_queue(
                files,
                &opts.input_directory,
                &opts.output_directory,
                &opts.output_suffix,
            );

            for job in &jobs {
                println!(
                    "- {} -> {}",
                    job.input_path.display(),
                    job.output_path.display()
                );
            }
            println!("Total jobs: {}", jobs.len());
        }
        Err(e) => {
            eprintln!("Error scanning directory: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_dry_run(opts: &EncodeOptions) {
    println!(
        "Dry run: building ffmpeg commands for {}",
        opts.input_directory.display()
    );

    match engine::scan(&opts.input_directory) {
        Ok(files) => {
            let jobs = engine::build_job_queue(
                files,
                &opts.input_directory,
                &opts.output_directory,
                &opts.output_suffix,
            );
            for job in &jobs {
                println!("{}", engine::format_watermark_cmd(job, opts));
            }
        }
        Err(e) => {
            eprintln!("Error scanning directory: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) => println!("Config loaded successfully from {}", path.display()),
                Err(e) => println!("Config loaded, but config path unknown: {:#}", e),
            }
            println!("{:#?}", cfg);
        }
        Err(e) => {
            println!("Config missing or invalid: {:#}", e);
            println!("Creating default config...");

            let cfg = config::Config::default();
            if let Err(err) = cfg.save() {
                eprintln!("Failed to save default config: {:#}", err);
                process::exit(1);
            } else {
                match config::Config::config_path() {
                    Ok(path) => println!("Default config saved to {}", path.display()),
                    Err(e) => println!("Default config saved (path unknown): {:#}", e),
                }
            }
        }
    }
}

/// Validate, discover, then watermark every file in sequence.
fn run_batch(opts: &EncodeOptions) {
    if let Err(e) = engine::validate_options(opts) {
        eprintln!("{}", e);
        process::exit(1);
    }

    if let Err(e) = engine::ensure_output_directory(&opts.output_directory) {
        eprintln!("{:#}", e);
        process::exit(1);
    }

    let files = match engine::scan(&opts.input_directory) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error scanning directory: {:#}", e);
            process::exit(1);
        }
    };

    if files.is_empty() {
        eprintln!(
            "No video files found in '{}'",
            opts.input_directory.display()
        );
        process::exit(1);
    }

    println!(
        "Found {} video files in '{}'",
        files.len(),
        opts.input_directory.display()
    );

    let mut jobs = engine::build_job_queue(
        files,
        &opts.input_directory,
        &opts.output_directory,
        &opts.output_suffix,
    );
    let total = jobs.len();

    for (idx, job) in jobs.iter_mut().enumerate() {
        if let Some(parent) = job.output_path.parent() {
            if let Err(e) = engine::ensure_output_directory(parent) {
                eprintln!("{:#}", e);
                process::exit(1);
            }
        }

        println!(
            "[{}/{}] processing {} -> {}",
            idx + 1,
            total,
            job.input_path.display(),
            job.output_path.display()
        );

        match engine::encode_job(job, opts) {
            Ok(status) if status.success() => {}
            Ok(status) => {
                eprintln!(
                    "ffmpeg failed for {} ({})",
                    job.input_path.display(),
                    status
                );
                if opts.fail_fast {
                    process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("{:#}", e);
                process::exit(1);
            }
        }
    }

    let failed = jobs.iter().filter(|j| j.status == JobStatus::Failed).count();
    if failed > 0 {
        println!("All {} videos processed, {} failed", total, failed);
    } else {
        println!("All {} videos processed", total);
    }
}
