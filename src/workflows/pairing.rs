use regex::Regex;

use crate::config::MatchConfig;
use crate::domain::models::{RenamePlan, VideoCandidate};
use crate::workflows::matchers::EpisodeMatcher;

/// Split a filename into base name and extension on the last dot, then test
/// the extension against the accepted set. An empty set accepts anything;
/// otherwise membership is exact and case-sensitive. Filenames without an
/// extension never classify.
pub fn classify(filename: &str, extensions: &[String]) -> Option<(String, String)> {
    let re = Regex::new(r"^(.*)(\.\w*)$").unwrap();
    let caps = re.captures(filename)?;
    let base_name = caps.get(1)?.as_str();
    let extension = caps.get(2)?.as_str();

    if !extensions.is_empty() && !extensions.iter().any(|e| e == extension) {
        return None;
    }

    Some((base_name.to_string(), extension.to_string()))
}

/// An empty search word passes everything; otherwise the filename must
/// contain it as a literal, case-sensitive substring.
pub fn matches_search_word(filename: &str, search_word: &str) -> bool {
    search_word.is_empty() || filename.contains(search_word)
}

/// Video files that pass the search word, carry an accepted video extension
/// and contain an episode token, in listing order.
pub fn video_candidates(
    filenames: &[String],
    config: &MatchConfig,
    matcher: &dyn EpisodeMatcher,
) -> Vec<VideoCandidate> {
    filenames
        .iter()
        .filter(|name| matches_search_word(name, &config.search_word))
        .filter_map(|name| {
            let (base_name, _) = classify(name, &config.video_extensions)?;
            let key = matcher.episode_key(name)?;
            Some(VideoCandidate {
                filename: name.clone(),
                base_name,
                key,
            })
        })
        .collect()
}

/// Rename plans for one video candidate: every subtitle file in listing
/// order whose name carries the candidate's episode key. The destination is
/// the video's base name plus the subtitle's own extension.
pub fn subtitle_plans(
    candidate: &VideoCandidate,
    filenames: &[String],
    config: &MatchConfig,
    matcher: &dyn EpisodeMatcher,
) -> Vec<RenamePlan> {
    let mut plans = Vec::new();

    for name in filenames {
        if !matches_search_word(name, &config.search_word) {
            continue;
        }
        let Some((_, extension)) = classify(name, &config.subtitle_extensions) else {
            continue;
        };
        if !matcher.subtitle_matches(name, &candidate.key) {
            continue;
        }

        plans.push(RenamePlan {
            source: name.clone(),
            destination: format!("{}{}", candidate.base_name, extension),
        });
    }

    plans
}

/// Every qualifying (video, subtitle) pair in video-major, subtitle-minor
/// order. Pairs are not deduplicated; a subtitle may appear in several plans
/// and several plans may share a destination.
pub fn find_pairs(
    filenames: &[String],
    config: &MatchConfig,
    matcher: &dyn EpisodeMatcher,
) -> Vec<RenamePlan> {
    video_candidates(filenames, config, matcher)
        .iter()
        .flat_map(|candidate| subtitle_plans(candidate, filenames, config, matcher))
        .collect()
}

/// Destinations claimed by more than one plan, in first-seen order. Renaming
/// all such plans means a later rename overwrites an earlier one.
pub fn destination_collisions(plans: &[RenamePlan]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for plan in plans {
        match counts.iter_mut().find(|(d, _)| *d == plan.destination) {
            Some((_, n)) => *n += 1,
            None => counts.push((&plan.destination, 1)),
        }
    }

    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(d, _)| d.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::matchers::token::TokenMatcher;

    fn config(search: &str, video: &[&str], subtitle: &[&str]) -> MatchConfig {
        MatchConfig {
            search_word: search.to_string(),
            video_extensions: video.iter().map(|s| s.to_string()).collect(),
            subtitle_extensions: subtitle.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classify_requires_an_extension() {
        assert_eq!(classify("no_extension", &[]), None);
    }

    #[test]
    fn classify_splits_on_the_last_dot() {
        assert_eq!(
            classify("Show.S02E12.mkv", &[".mkv".to_string()]),
            Some(("Show.S02E12".to_string(), ".mkv".to_string()))
        );
    }

    #[test]
    fn classify_with_an_empty_set_accepts_any_extension() {
        assert_eq!(
            classify("Show.S02E12.avi", &[]),
            Some(("Show.S02E12".to_string(), ".avi".to_string()))
        );
    }

    #[test]
    fn classify_membership_is_exact_and_case_sensitive() {
        assert_eq!(classify("Show.S02E12.mp4", &[".mkv".to_string()]), None);
        assert_eq!(classify("Show.S02E12.MKV", &[".mkv".to_string()]), None);
    }

    #[test]
    fn search_word_is_a_literal_substring() {
        assert!(matches_search_word("Queens.S01E01.mkv", "Queens"));
        assert!(!matches_search_word("Mother.S01E01.mkv", "Queens"));
        assert!(matches_search_word("anything", ""));
    }

    #[test]
    fn finds_a_single_pair() {
        let filenames = names(&["Show.S02E12.mkv", "Show.02x12.srt", "Other.txt"]);
        let config = config("", &[".mkv"], &[".srt"]);

        let plans = find_pairs(&filenames, &config, &TokenMatcher);

        assert_eq!(
            plans,
            vec![RenamePlan {
                source: "Show.02x12.srt".to_string(),
                destination: "Show.S02E12.srt".to_string(),
            }]
        );
    }

    #[test]
    fn search_word_filters_both_videos_and_subtitles() {
        let filenames = names(&[
            "Mother.02x12.srt",
            "Mother.S02E12.mkv",
            "Queens.02x12.srt",
            "Queens.S02E12.mkv",
        ]);
        let config = config("Queens", &[".mkv"], &[".srt"]);

        let plans = find_pairs(&filenames, &config, &TokenMatcher);

        assert_eq!(
            plans,
            vec![RenamePlan {
                source: "Queens.02x12.srt".to_string(),
                destination: "Queens.S02E12.srt".to_string(),
            }]
        );
    }

    #[test]
    fn candidate_extraction_keeps_listing_order() {
        let filenames = names(&["A.S01E01.mkv", "B.S01E02.mkv", "B.S01E02.srt"]);
        let config = config("", &[".mkv"], &[".srt"]);

        let candidates = video_candidates(&filenames, &config, &TokenMatcher);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].filename, "A.S01E01.mkv");
        assert_eq!(candidates[0].base_name, "A.S01E01");
        assert_eq!(candidates[0].key.season, "01");
        assert_eq!(candidates[1].filename, "B.S01E02.mkv");
    }

    #[test]
    fn emits_every_pair_video_major_subtitle_minor() {
        let filenames = names(&[
            "Show.S01E01.mkv",
            "Show.S01E01.srt",
            "Show.S01E02.mkv",
            "Show.s01e01.sub",
        ]);
        let config = config("", &[".mkv"], &[".srt", ".sub"]);

        let plans = find_pairs(&filenames, &config, &TokenMatcher);

        assert_eq!(
            plans,
            vec![
                RenamePlan {
                    source: "Show.S01E01.srt".to_string(),
                    destination: "Show.S01E01.srt".to_string(),
                },
                RenamePlan {
                    source: "Show.s01e01.sub".to_string(),
                    destination: "Show.S01E01.sub".to_string(),
                },
            ]
        );
    }

    #[test]
    fn colliding_destinations_are_reported() {
        // Two containers of the same episode share a base name once the
        // extension is stripped, so both plans target the same destination.
        let filenames = names(&["Show.S02E12.avi", "Show.S02E12.mkv", "Show.02x12.srt"]);
        let config = config("", &[".mkv", ".avi"], &[".srt"]);

        let plans = find_pairs(&filenames, &config, &TokenMatcher);

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].destination, plans[1].destination);
        assert_eq!(
            destination_collisions(&plans),
            vec!["Show.S02E12.srt".to_string()]
        );
    }

    #[test]
    fn no_collisions_for_distinct_destinations() {
        let plans = vec![
            RenamePlan {
                source: "a.srt".to_string(),
                destination: "x.srt".to_string(),
            },
            RenamePlan {
                source: "b.srt".to_string(),
                destination: "y.srt".to_string(),
            },
        ];
        assert!(destination_collisions(&plans).is_empty());
    }

    #[test]
    fn rerun_after_renaming_only_yields_noop_plans() {
        let filenames = names(&["Show.S02E12.mkv", "Show.02x12.srt"]);
        let config = config("", &[".mkv"], &[".srt"]);

        let plans = find_pairs(&filenames, &config, &TokenMatcher);
        assert_eq!(plans.len(), 1);

        // Apply the plan in-memory and run the matcher again: the renamed
        // subtitle still carries the token, so the only plan it produces is
        // a rename onto itself.
        let renamed = names(&["Show.S02E12.mkv", "Show.S02E12.srt"]);
        let plans = find_pairs(&renamed, &config, &TokenMatcher);

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].source, plans[0].destination);
    }
}
