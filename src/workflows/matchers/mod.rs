use crate::domain::models::EpisodeKey;

/// Policy for recognizing episode tokens in filenames. Kept behind a trait
/// so the parsing rules can be swapped without touching the pairing logic.
pub trait EpisodeMatcher {
    /// Extract the season/episode key from a video filename, if present.
    /// The first token in the filename wins.
    fn episode_key(&self, filename: &str) -> Option<EpisodeKey>;

    /// Whether a subtitle filename carries the given key, in either the
    /// "02x12" or the "S02E12" encoding. Case-insensitive on both sides.
    fn subtitle_matches(&self, filename: &str, key: &EpisodeKey) -> bool {
        let name = filename.to_uppercase();
        name.contains(&key.cross_encoding().to_uppercase())
            || name.contains(&key.sxxexx_encoding().to_uppercase())
    }
}

pub mod strict;
pub mod token;
