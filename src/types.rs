// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search corpus.
//!
//! Two shapes matter here. [`RawRecord`] is what the corpus provider hands
//! over: pages still carrying their rich-text body, documents carrying a file
//! name. [`SearchItem`] is what the index holds after extraction: flat text
//! fields plus the locator data needed to route to the item.
//!
//! # Invariants
//!
//! - **SearchItem**: `id` is unique within one loaded corpus snapshot.
//!   Uniqueness comes from the provider's storage layer; the index does not
//!   re-check it.
//! - **SearchItem**: `content_text` is empty for documents, always. Text is
//!   never extracted from uploaded files.
//! - **RawRecord**: `body` holds the page's rich-text tree as a JSON string,
//!   exactly as the editor stored it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant discriminator plus the fields needed to build a navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    /// A server-rendered page, addressed by slug.
    Page { slug: String },
    /// An uploaded file, addressed by id.
    #[serde(rename_all = "camelCase")]
    Document { file_name: String },
}

/// One searchable unit: a published page or an uploaded document.
///
/// The `title` field carries most of the match weight; `content_text` is the
/// plain text pulled out of a page body and may be empty. Serialization uses
/// the same camelCase, type-tagged shape the portal's own payloads use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub id: String,
    pub title: String,
    /// Plain text derived from the page body; always empty for documents.
    pub content_text: String,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl SearchItem {
    /// Route-addressable path for this item: `/{slug}` for pages, the
    /// id-addressed document route for documents. The core only builds the
    /// string; routing is the host's job.
    pub fn locator(&self) -> String {
        match &self.kind {
            ItemKind::Page { slug } => format!("/{}", slug),
            ItemKind::Document { .. } => format!("/documents/{}", self.id),
        }
    }

    /// Preview of the body text for result lists, cut at `max_chars`
    /// characters (not bytes, so multi-byte text never splits mid-char).
    pub fn excerpt(&self, max_chars: usize) -> String {
        self.content_text.chars().take(max_chars).collect()
    }
}

/// A record as the corpus provider hands it over, before extraction.
///
/// Pages arrive with their rich-text body and published flag; the flag
/// defaults to true for providers that only ever serve published rows.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawRecord {
    #[serde(rename_all = "camelCase")]
    Page {
        id: String,
        title: String,
        slug: String,
        /// Rich-text body as a JSON string, as stored by the editor.
        #[serde(default, alias = "content")]
        body: String,
        #[serde(default = "default_published")]
        is_published: bool,
    },
    #[serde(rename_all = "camelCase")]
    Document {
        id: String,
        title: String,
        file_name: String,
    },
}

fn default_published() -> bool {
    true
}

/// Why a corpus could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// The provider's read operation failed (network, server, storage).
    Fetch { reason: String },
    /// The payload came back but did not decode into records.
    Decode { reason: String },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Fetch { reason } => {
                write!(f, "corpus fetch failed: {}", reason)
            }
            CorpusError::Decode { reason } => {
                write!(f, "corpus payload did not decode: {}", reason)
            }
        }
    }
}

impl std::error::Error for CorpusError {}
