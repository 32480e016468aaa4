mod cli;
mod config;
mod domain;
mod infra;
mod workflows;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;

use cli::{Cli, MatchMode};
use config::MatchConfig;
use domain::models::RenamePlan;
use infra::listing;
use workflows::matchers::{strict::StrictMatcher, token::TokenMatcher, EpisodeMatcher};
use workflows::{pairing, renamer};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = MatchConfig::resolve(&cli)?;

    if !cli.path.is_dir() {
        bail!("Input path is not a directory: {:?}", cli.path);
    }

    print_search_summary(&cli.path, &config);

    let filenames = listing::list_filenames(&cli.path)
        .with_context(|| format!("Failed to read directory {:?}", cli.path))?;

    let matcher: Box<dyn EpisodeMatcher> = match cli.match_mode {
        MatchMode::Token => Box::new(TokenMatcher),
        MatchMode::Strict => Box::new(StrictMatcher),
    };

    let candidates = pairing::video_candidates(&filenames, &config, matcher.as_ref());
    println!("Found {} video file(s) with an episode token", candidates.len());

    let mut plans: Vec<RenamePlan> = Vec::new();
    for candidate in &candidates {
        for plan in pairing::subtitle_plans(candidate, &filenames, &config, matcher.as_ref()) {
            println!(
                "Found a match between {} and {}",
                candidate.filename, plan.source
            );
            plans.push(plan);
        }
    }

    for destination in pairing::destination_collisions(&plans) {
        eprintln!(
            "Warning: multiple matches target {destination}; a later rename will overwrite an earlier one"
        );
    }

    let mut rename_count = 0;
    for plan in &plans {
        match renamer::apply_plan(&cli.path, plan, cli.no_confirm) {
            Ok(true) => rename_count += 1,
            Ok(false) => {}
            // A failed rename should not abort the remaining queue.
            Err(e) => eprintln!("Error renaming {}: {e}", plan.source),
        }
    }

    if rename_count > 0 {
        println!("{rename_count} files renamed.");
    } else {
        println!("No files found to rename.");
    }

    Ok(())
}

fn print_search_summary(path: &Path, config: &MatchConfig) {
    println!("Looking for files in {}", path.display());

    if config.search_word.is_empty() {
        println!("Looking for all files");
    } else {
        println!(
            "Looking for files that include the expression: {}",
            config.search_word
        );
    }

    if config.video_extensions.is_empty() {
        println!("Looking for all video files");
    } else {
        println!(
            "Looking for video files with file extension: {}",
            config.video_extensions.join(", ")
        );
    }

    if config.subtitle_extensions.is_empty() {
        println!("Looking for all subtitle files");
    } else {
        println!(
            "Looking for subtitle files with file extension: {}",
            config.subtitle_extensions.join(", ")
        );
    }
}
