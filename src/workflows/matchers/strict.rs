use regex::Regex;

use super::EpisodeMatcher;
use crate::domain::models::EpisodeKey;

/// Digits-only matcher for collections where letter tokens would be false
/// positives (e.g. "SAAEBB" in a release group tag).
pub struct StrictMatcher;

impl EpisodeMatcher for StrictMatcher {
    fn episode_key(&self, filename: &str) -> Option<EpisodeKey> {
        let re = Regex::new(r"(?i)S(\d{2})E(\d{2})").unwrap();
        let caps = re.captures(filename)?;
        Some(EpisodeKey {
            season: caps.get(1)?.as_str().to_string(),
            episode: caps.get(2)?.as_str().to_string(),
        })
    }
}
