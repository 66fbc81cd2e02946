// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus acquisition: the provider contract and record normalization.
//!
//! The provider is whatever the host wires in - an HTTP client hitting the
//! portal's search-data endpoint, a database handle, a fixture in tests.
//! The core calls [`CorpusProvider::fetch`] exactly once per session and
//! treats what comes back as the complete, immutable corpus.

use crate::extract::extract_text;
use crate::types::{CorpusError, ItemKind, RawRecord, SearchItem};

/// The one read operation the search core needs from the outside world.
pub trait CorpusProvider {
    /// Produce every searchable record. Called once per session; a failure
    /// leaves that session with permanently empty results, so providers
    /// should do their own retrying if their transport wants any.
    fn fetch(&self) -> Result<Vec<RawRecord>, CorpusError>;
}

/// Decode a JSON payload (typically an HTTP response body) into records.
pub fn decode_records(payload: &str) -> Result<Vec<RawRecord>, CorpusError> {
    serde_json::from_str(payload).map_err(|err| CorpusError::Decode {
        reason: err.to_string(),
    })
}

/// Normalize raw records into searchable items, in source order.
///
/// Pages run text extraction over their body; a body that cannot be
/// extracted degrades that one item to empty body text, and the item stays
/// matchable by title. Unpublished pages are dropped - only what a visitor
/// can reach belongs in the corpus. Documents never carry body text.
pub fn build_corpus(records: Vec<RawRecord>) -> Vec<SearchItem> {
    records
        .into_iter()
        .filter_map(|record| match record {
            RawRecord::Page {
                id,
                title,
                slug,
                body,
                is_published,
            } => {
                if !is_published {
                    return None;
                }
                Some(SearchItem {
                    id,
                    title,
                    content_text: extract_text(&body),
                    kind: ItemKind::Page { slug },
                })
            }
            RawRecord::Document {
                id,
                title,
                file_name,
            } => Some(SearchItem {
                id,
                title,
                content_text: String::new(),
                kind: ItemKind::Document { file_name },
            }),
        })
        .collect()
}
