//! Fuzzy lookup of service names for the assistant's smart mode.
//!
//! Candidates are scored with the skim matcher and normalized against the
//! query's self-match score, which gives a 0..1 similarity the cutoff can
//! apply to. Ties are broken by exact (case-insensitive) equality first,
//! then score, then name, so a query that names a service verbatim always
//! ranks it on top.

use std::cmp::Ordering;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::catalog::FlatServiceEntry;

/// Result cap for one search.
pub const MAX_MATCHES: usize = 20;
/// Minimum normalized similarity for a candidate to count as a match.
pub const SCORE_CUTOFF: f64 = 0.4;

#[derive(Debug)]
pub struct ServiceMatch<'a> {
    pub entry: &'a FlatServiceEntry,
    pub score: f64,
}

/// Rank the closest service names for a free-text query, best first.
/// Returns at most `limit` entries with normalized score >= `cutoff`;
/// an empty or unmatchable query yields no matches.
pub fn find_matches<'a>(
    query: &str,
    entries: &'a [FlatServiceEntry],
    limit: usize,
    cutoff: f64,
) -> Vec<ServiceMatch<'a>> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let Some(best_possible) = matcher.fuzzy_match(&query, &query).filter(|s| *s > 0) else {
        return Vec::new();
    };

    let mut scored: Vec<(bool, f64, &FlatServiceEntry)> = Vec::new();
    for entry in entries {
        let candidate = entry.service_name.to_lowercase();
        let Some(raw) = matcher.fuzzy_match(&candidate, &query) else {
            continue;
        };
        let score = raw as f64 / best_possible as f64;
        if score < cutoff {
            continue;
        }
        scored.push((candidate == query, score, entry));
    }

    scored.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then(b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
            .then_with(|| a.2.service_name.cmp(&b.2.service_name))
    });
    scored.truncate(limit);

    scored
        .into_iter()
        .map(|(_, score, entry)| ServiceMatch { entry, score })
        .collect()
}
