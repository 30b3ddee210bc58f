// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Persisted defaults for every CLI option. Flags passed on the command
/// line always win over these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_input_directory")]
    pub input_directory: PathBuf,

    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Encoder quality, 0-51
    #[serde(default = "default_video_quality")]
    pub video_quality: i32,

    /// hevc_qsv or h264_qsv
    #[serde(default = "default_video_codec")]
    pub video_codec: String,

    #[serde(default = "default_font_size")]
    pub font_size: u32,

    #[serde(default = "default_font_color")]
    pub font_color: String,

    #[serde(default = "default_font_file")]
    pub font_file: PathBuf,

    /// Target bitrate; unset means quality-based rate control
    #[serde(default)]
    pub bitrate: Option<String>,

    #[serde(default = "default_watermark_text")]
    pub watermark_text: String,

    /// Extra ffmpeg arguments appended to every command
    #[serde(default)]
    pub extra_args: String,

    /// Abort the batch on the first ffmpeg failure
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_input_directory() -> PathBuf {
    PathBuf::from("Input")
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("Output")
}

fn default_output_suffix() -> String {
    "pinseclub".to_string()
}

fn default_video_quality() -> i32 {
    18
}

fn default_video_codec() -> String {
    "hevc_qsv".to_string()
}

fn default_font_size() -> u32 {
    30
}

fn default_font_color() -> String {
    "white".to_string()
}

fn default_font_file() -> PathBuf {
    PathBuf::from("./fonts/SimSun.ttf")
}

fn default_watermark_text() -> String {
    "PINSE.CLUB".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            input_directory: default_input_directory(),
            output_directory: default_output_directory(),
            output_suffix: default_output_suffix(),
            video_quality: default_video_quality(),
            video_codec: default_video_codec(),
            font_size: default_font_size(),
            font_color: default_font_color(),
            font_file: default_font_file(),
            bitrate: None,
            watermark_text: default_watermark_text(),
            extra_args: String::new(),
            fail_fast: false,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("qsvmark")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("qsvmark")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            let config: Config = toml::from_str(&contents).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?;

            Ok(config)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            // (e.g., if the directory isn't writable)
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {}", e);
                eprintln!(
                    "Using built-in defaults. Run 'qsvmark init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.defaults.input_directory, PathBuf::from("Input"));
        assert_eq!(config.defaults.output_directory, PathBuf::from("Output"));
        assert_eq!(config.defaults.output_suffix, "pinseclub");
        assert_eq!(config.defaults.video_quality, 18);
        assert_eq!(config.defaults.video_codec, "hevc_qsv");
        assert_eq!(config.defaults.font_size, 30);
        assert_eq!(config.defaults.font_color, "white");
        assert_eq!(config.defaults.font_file, PathBuf::from("./fonts/SimSun.ttf"));
        assert_eq!(config.defaults.bitrate, None);
        assert_eq!(config.defaults.watermark_text, "PINSE.CLUB");
        assert_eq!(config.defaults.fail_fast, false);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();

        // Should be able to deserialize back
        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            deserialized.defaults.output_suffix,
            config.defaults.output_suffix
        );
        assert_eq!(
            deserialized.defaults.video_quality,
            config.defaults.video_quality
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let deserialized: Config = toml::from_str(
            r#"
            [defaults]
            video_codec = "h264_qsv"
            bitrate = "4M"
            "#,
        )
        .unwrap();

        assert_eq!(deserialized.defaults.video_codec, "h264_qsv");
        assert_eq!(deserialized.defaults.bitrate, Some("4M".to_string()));
        assert_eq!(deserialized.defaults.video_quality, 18);
        assert_eq!(deserialized.defaults.output_suffix, "pinseclub");
    }
}
