use regex::Regex;

use super::EpisodeMatcher;
use crate::domain::models::EpisodeKey;

/// Default matcher: any two word characters after S and after E, so release
/// names like "S02E12" and oddballs like "SAAEBB" both count.
pub struct TokenMatcher;

impl EpisodeMatcher for TokenMatcher {
    fn episode_key(&self, filename: &str) -> Option<EpisodeKey> {
        let re = Regex::new(r"(?i)S(\w{2})E(\w{2})").unwrap();
        let caps = re.captures(filename)?;
        Some(EpisodeKey {
            season: caps.get(1)?.as_str().to_string(),
            episode: caps.get(2)?.as_str().to_string(),
        })
    }
}
