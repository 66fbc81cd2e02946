// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution: score every item, drop the non-matches, rank the rest.
//!
//! The corpus is a few hundred items at most, so a query is a single linear
//! pass over the snapshots - cheap enough to run synchronously on every
//! keystroke with no debouncing and no cancellation. Each query stands
//! alone; the last one to run is the one whose results are displayed.

use crate::index::SearchIndex;
use crate::scoring::{combined_score, field_score};
use crate::types::SearchItem;
use crate::utils::normalize;

/// One ranked hit. Lower scores are better; 0 is a perfect match.
#[derive(Debug, Clone)]
pub struct SearchMatch {
    pub item: SearchItem,
    pub score: f64,
}

/// Run a free-text query against the index.
///
/// An empty or whitespace-only term yields no results - the UI reads that
/// as "nothing typed yet", not "nothing found". Otherwise results come back
/// sorted ascending by score, ties keeping corpus order. Never errors:
/// an empty index (still loading, failed load, empty portal) just produces
/// an empty list.
pub fn search(index: &SearchIndex, term: &str) -> Vec<SearchMatch> {
    let query = normalize(term);
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<SearchMatch> = index
        .entries()
        .filter_map(|(item, title, content)| {
            let score = combined_score(field_score(&query, title), field_score(&query, content))?;
            Some(SearchMatch {
                item: item.clone(),
                score,
            })
        })
        .collect();

    // Stable sort: equal scores keep source order across rebuilds.
    matches.sort_by(|a, b| a.score.total_cmp(&b.score));
    matches
}
