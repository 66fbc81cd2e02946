// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match ranking.
//!
//! Scores live on a 0-1 scale where 0 is a perfect match and anything above
//! the cutoff is no match at all; result lists sort ascending. The title
//! carries most of the weight: because matching fields combine as
//! `score^weight` and scores sit below 1, a title hit always lands further
//! from 1 than an equally strong body hit. Body text can surface a page, it
//! just cannot outrank the title.
//!
//! # Constants
//!
//! | Constant          | Value | Why this value |
//! |-------------------|-------|----------------|
//! | `TITLE_WEIGHT`    | 0.7   | Title matches reflect intent far more often than incidental body hits |
//! | `CONTENT_WEIGHT`  | 0.3   | Enough for long-form pages to surface, never enough to win |
//! | `SCORE_THRESHOLD` | 0.4   | Rejects near-random overlap while keeping one-or-two-edit typos |

use crate::fuzzy::levenshtein_bounded;

/// Weight of the title field in the combined score.
pub const TITLE_WEIGHT: f64 = 0.7;

/// Weight of the body text field in the combined score.
pub const CONTENT_WEIGHT: f64 = 0.3;

/// Similarity cutoff: a field scoring above this does not count as a match.
/// A field at exactly the cutoff still matches.
pub const SCORE_THRESHOLD: f64 = 0.4;

/// Floor substituted for perfect field scores so the weighted product of
/// several matching fields stays nonzero and comparable.
const SCORE_FLOOR: f64 = f64::EPSILON;

/// Discount for a verbatim occurrence of the whole query inside a field.
const CONTAINMENT_DISCOUNT: f64 = 0.15;

/// Discount when a query token is a prefix of an indexed word.
const PREFIX_DISCOUNT: f64 = 0.5;

/// Discount when a query token sits inside an indexed word.
const INFIX_DISCOUNT: f64 = 0.7;

/// Score one field against a query. 0 is perfect, 1 is no relation.
///
/// Both inputs must already be normalized. An empty field never matches -
/// that is what keeps documents (whose body text is always empty) from
/// matching on anything but their title.
pub fn field_score(query: &str, field: &str) -> f64 {
    if query.is_empty() || field.is_empty() {
        return 1.0;
    }
    if field == query {
        return 0.0;
    }
    if field.contains(query) {
        // A verbatim hit is close to perfect; longer fields dilute it a
        // little so the tightest field wins ties.
        let coverage = char_len(query) as f64 / char_len(field) as f64;
        return CONTAINMENT_DISCOUNT * (1.0 - coverage);
    }

    // Mean over query tokens of the best word-level score. Every token has
    // to land somewhere for the mean to stay low; one stray token drags the
    // score up instead of disqualifying the field outright.
    let words: Vec<&str> = field.split(' ').collect();
    let mut total = 0.0;
    let mut tokens = 0usize;
    for token in query.split(' ') {
        let best = words
            .iter()
            .map(|word| word_score(token, word))
            .fold(1.0_f64, f64::min);
        total += best;
        tokens += 1;
    }
    total / tokens as f64
}

/// Combine per-field scores into one rank key.
///
/// Only fields at or under [`SCORE_THRESHOLD`] participate; each contributes
/// `score^weight`, so the heavier field pulls the product further down.
/// Returns `None` when no field matched, which excludes the item entirely.
pub fn combined_score(title: f64, content: f64) -> Option<f64> {
    let mut score = 1.0;
    let mut matched = false;
    for (field, weight) in [(title, TITLE_WEIGHT), (content, CONTENT_WEIGHT)] {
        if field <= SCORE_THRESHOLD {
            score *= field.max(SCORE_FLOOR).powf(weight);
            matched = true;
        }
    }
    matched.then_some(score)
}

/// Score one query token against one indexed word.
fn word_score(token: &str, word: &str) -> f64 {
    if token == word {
        return 0.0;
    }

    let token_len = char_len(token);
    let word_len = char_len(word);
    if word.starts_with(token) {
        return PREFIX_DISCOUNT * (word_len - token_len) as f64 / word_len as f64;
    }
    if word.contains(token) {
        return INFIX_DISCOUNT * (word_len - token_len) as f64 / word_len as f64;
    }

    // Only edits cheap enough to stay under the cutoff are worth computing.
    let longest = token_len.max(word_len);
    let max_edits = (SCORE_THRESHOLD * longest as f64) as usize;
    match levenshtein_bounded(token, word, max_edits) {
        Some(distance) => distance as f64 / longest as f64,
        None => 1.0,
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
