use anyhow::Result;
use std::fs;
use std::path::Path;

/// Plain file names in a directory, sorted so every downstream iteration is
/// deterministic. Subdirectories are skipped; this tool never recurses.
pub fn list_filenames(directory: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}
