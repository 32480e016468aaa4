use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;

const DEFAULT_VIDEO_EXTENSION: &str = ".mkv";
const DEFAULT_SUBTITLE_EXTENSION: &str = ".srt";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    search_word: Option<String>,
    video_extensions: Option<Vec<String>>,
    subtitle_extensions: Option<Vec<String>>,
}

/// Effective matching configuration, resolved once and passed into the
/// matcher. An empty extension set accepts any extension; an empty search
/// word matches every filename.
#[derive(Debug, Clone, Default)]
pub struct MatchConfig {
    pub search_word: String,
    pub video_extensions: Vec<String>,
    pub subtitle_extensions: Vec<String>,
}

impl MatchConfig {
    /// CLI flags win over the config file, which wins over the built-in
    /// defaults.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = load_config_file()?;

        Ok(Self {
            search_word: cli
                .search
                .clone()
                .or(file.search_word)
                .unwrap_or_default(),
            video_extensions: resolve_extensions(
                &cli.video_extensions,
                file.video_extensions,
                DEFAULT_VIDEO_EXTENSION,
            ),
            subtitle_extensions: resolve_extensions(
                &cli.subtitle_extensions,
                file.subtitle_extensions,
                DEFAULT_SUBTITLE_EXTENSION,
            ),
        })
    }
}

/// Passing an empty value on the command line (e.g. `--video-ext=`) clears
/// the set, which accepts any extension.
fn resolve_extensions(
    cli_values: &[String],
    file_values: Option<Vec<String>>,
    default: &str,
) -> Vec<String> {
    if !cli_values.is_empty() {
        return cli_values
            .iter()
            .filter(|e| !e.is_empty())
            .cloned()
            .collect();
    }

    match file_values {
        Some(values) => values,
        None => vec![default.to_string()],
    }
}

fn load_config_file() -> Result<ConfigFile> {
    let config_path = get_config_path();
    if !config_path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", config_path.display()))
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("subtitle-matcher"))
        // If the standard path could not be found (e.g. `$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}
