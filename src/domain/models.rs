/// Season/episode token pair extracted from a video filename, e.g. ("02", "12").
/// Tokens keep the case they were captured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeKey {
    pub season: String,
    pub episode: String,
}

impl EpisodeKey {
    /// "02x12" style encoding.
    pub fn cross_encoding(&self) -> String {
        format!("{}x{}", self.season, self.episode)
    }

    /// "S02E12" style encoding.
    pub fn sxxexx_encoding(&self) -> String {
        format!("S{}E{}", self.season, self.episode)
    }
}

/// A video file that carries an episode key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
    pub filename: String,
    pub base_name: String,
    pub key: EpisodeKey,
}

/// A planned rename of a subtitle file to a video's base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub source: String,
    pub destination: String,
}
