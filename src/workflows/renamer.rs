use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::domain::models::RenamePlan;

pub fn confirm_rename(source: &str, destination: &str) -> Result<bool> {
    println!("Rename \"{source}\" -> \"{destination}\"? (y/n)");

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("") {
            Ok(line) => match line.trim() {
                "y" | "Y" | "yes" | "Yes" | "YES" => return Ok(true),
                "n" | "N" | "no" | "No" | "NO" => return Ok(false),
                _ => println!("Please type yes or no and then press enter:"),
            },
            // Ctrl-C / Ctrl-D declines the rename.
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(false),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Execute one plan inside `directory`. Returns true when the file was
/// actually renamed.
pub fn apply_plan(directory: &Path, plan: &RenamePlan, skip_confirm: bool) -> Result<bool> {
    if plan.source == plan.destination {
        println!("{} is already named correctly.", plan.source);
        return Ok(false);
    }

    if !skip_confirm && !confirm_rename(&plan.source, &plan.destination)? {
        println!("Skipped.");
        return Ok(false);
    }

    fs::rename(
        directory.join(&plan.source),
        directory.join(&plan.destination),
    )?;
    println!("File was renamed to {}", plan.destination);
    Ok(true)
}
