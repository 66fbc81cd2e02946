// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted fuzzy search over a community portal's pages and documents.
//!
//! This crate is the search subsystem of a content portal: it loads a corpus
//! of published pages and uploaded documents once per session, builds a
//! fuzzy-match index over it, and drives the open/close/query lifecycle of
//! the search surface. Everything else - HTTP, storage, rendering, routing -
//! stays on the host's side of two narrow contracts: "fetch me the corpus"
//! ([`CorpusProvider`]) and "navigate to this locator" (the string returned
//! by [`SearchSession::select`]).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  corpus.rs  │────▶│   index.rs   │────▶│  search.rs  │
//! │ (fetch +    │     │ (normalized  │     │ (score +    │
//! │  extract)   │     │  snapshots)  │     │  rank)      │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        ▲                                        │
//!        │                                        ▼
//! ┌──────┴──────────────────────────────────────────────────┐
//! │                       session.rs                        │
//! │  (open/close lifecycle, live query, result selection)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The corpus is immutable for the session: fetched once, indexed once,
//! discarded when the session goes away. Staleness until the next page load
//! is an accepted tradeoff.
//!
//! # Usage
//!
//! ```
//! use talpa::{build_corpus, build_index, search, RawRecord};
//!
//! let records = vec![RawRecord::Document {
//!     id: "d1".into(),
//!     title: "Bylaws 2024".into(),
//!     file_name: "bylaws.pdf".into(),
//! }];
//! let index = build_index(build_corpus(records));
//!
//! let results = search(&index, "bylaw");
//! assert_eq!(results[0].item.id, "d1");
//! ```

// Module declarations
mod corpus;
mod extract;
mod fuzzy;
mod index;
mod scoring;
mod search;
mod session;
mod types;
mod utils;

// Re-exports for public API
pub use corpus::{build_corpus, decode_records, CorpusProvider};
pub use extract::extract_text;
pub use fuzzy::levenshtein_bounded;
pub use index::{build_index, SearchIndex};
pub use scoring::{combined_score, field_score, CONTENT_WEIGHT, SCORE_THRESHOLD, TITLE_WEIGHT};
pub use search::{search, SearchMatch};
pub use session::{SearchKey, SearchSession, SessionState};
pub use types::{CorpusError, ItemKind, RawRecord, SearchItem};
pub use utils::normalize;
