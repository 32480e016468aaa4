use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum MatchMode {
    Token,
    Strict,
}

#[derive(Parser)]
#[command(name = "subtitle-matcher")]
#[command(about = "Match subtitle files to video files by their season/episode token and rename them")]
pub struct Cli {
    /// Directory with video and subtitle files
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only consider filenames containing this word, e.g. 'Queens' or 'Mother'
    #[arg(long)]
    pub search: Option<String>,

    /// Accepted video file extension, e.g. '.mkv'. Repeatable; an empty value accepts any extension
    #[arg(long = "video-ext")]
    pub video_extensions: Vec<String>,

    /// Accepted subtitle file extension, e.g. '.srt'. Repeatable; an empty value accepts any extension
    #[arg(long = "subtitle-ext")]
    pub subtitle_extensions: Vec<String>,

    /// Skip confirmation prompts
    #[arg(long)]
    pub no_confirm: bool,

    /// How episode tokens are recognized in filenames
    #[arg(long, default_value = "token")]
    pub match_mode: MatchMode,
}
