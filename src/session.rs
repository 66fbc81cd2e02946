// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search surface lifecycle: open/close state, the live query, and the
//! result list the UI renders.
//!
//! A [`SearchSession`] is an explicit object owned by the host's composition
//! root - created on mount, dropped on unmount, handed down to whatever
//! renders the search surface. There is no ambient global instance and no
//! accessor that panics when wiring is missing. Every method is total:
//! querying before the corpus has loaded, closing a closed session, or
//! selecting past the end of the results are defined no-ops, not errors.
//!
//! The host forwards three kinds of outside events: global key presses
//! ([`SearchSession::handle_key`]), navigation-completed notifications
//! ([`SearchSession::route_changed`]), and result clicks
//! ([`SearchSession::select`]). Subscribing to and unsubscribing from those
//! event sources is the host's responsibility; the session holds no handles
//! that could leak.

use crate::corpus::{build_corpus, CorpusProvider};
use crate::index::{build_index, SearchIndex};
use crate::search::{search, SearchMatch};
use tracing::warn;

/// Where the session is in its open/close/query lifecycle.
///
/// `Closed` is both the initial state and re-enterable; nothing is terminal
/// while the session lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    /// Open with nothing typed - the UI shows its "type to search" prompt.
    OpenEmpty,
    /// Open with a query typed and results computed (possibly zero of them,
    /// which the UI renders as "no results found").
    OpenQuerying,
}

/// Global key events the host forwards while the session is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    /// The open shortcut. Ctrl+K and Cmd+K both map here; the core does not
    /// care which modifier the platform uses.
    Shortcut,
    Escape,
}

/// How far corpus loading has gotten. `Failed` behaves exactly like an
/// empty index; the distinction only matters for the loading flag.
#[derive(Debug, Clone)]
enum CorpusState {
    Loading,
    Ready(SearchIndex),
    Failed,
}

/// One search session: mount to unmount, one corpus snapshot.
#[derive(Debug, Clone)]
pub struct SearchSession {
    corpus: CorpusState,
    query: String,
    results: Vec<SearchMatch>,
    is_open: bool,
}

impl SearchSession {
    /// A fresh, closed session, waiting for its corpus.
    pub fn new() -> Self {
        Self {
            corpus: CorpusState::Loading,
            query: String::new(),
            results: Vec::new(),
            is_open: false,
        }
    }

    /// Fetch the corpus and build the index. One-shot: a failure is logged
    /// and the session settles into permanently empty results - no retry
    /// loop, the user can reload the page. Either way the loading flag
    /// clears and any pending query is recomputed against what loaded.
    pub fn load(&mut self, provider: &dyn CorpusProvider) {
        self.corpus = match provider.fetch() {
            Ok(records) => CorpusState::Ready(build_index(build_corpus(records))),
            Err(err) => {
                warn!(%err, "search corpus failed to load, search will return no results");
                CorpusState::Failed
            }
        };
        self.refresh();
    }

    /// True while the corpus fetch is still outstanding. The UI shows its
    /// loading indicator instead of results while this holds.
    pub fn is_loading(&self) -> bool {
        matches!(self.corpus, CorpusState::Loading)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The live query text, exactly as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True once a non-empty term has been typed. Distinguishes "no results
    /// found for X" from "type to search" in the UI.
    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    /// Current results, best match first.
    pub fn results(&self) -> &[SearchMatch] {
        &self.results
    }

    pub fn state(&self) -> SessionState {
        if !self.is_open {
            SessionState::Closed
        } else if self.query.is_empty() {
            SessionState::OpenEmpty
        } else {
            SessionState::OpenQuerying
        }
    }

    /// Open the search surface. A no-op when already open: reopening must
    /// not clobber a query in progress.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the surface and reset the query. Valid from any state.
    pub fn close(&mut self) {
        self.is_open = false;
        self.query.clear();
        self.results.clear();
    }

    /// Replace the live query and recompute results synchronously. The most
    /// recent call wins; there is no debounce and nothing to cancel.
    pub fn set_query(&mut self, term: &str) {
        self.query = term.to_string();
        self.refresh();
    }

    /// Route a forwarded global key event.
    pub fn handle_key(&mut self, key: SearchKey) {
        match key {
            SearchKey::Shortcut => self.open(),
            SearchKey::Escape => self.close(),
        }
    }

    /// Navigation finished somewhere in the host app: drop any open search
    /// state so it does not linger onto the next page.
    pub fn route_changed(&mut self) {
        self.close();
    }

    /// Pick the `nth` result. Closes the session and hands back the item's
    /// locator for the host's router; `None` when `nth` is out of range.
    pub fn select(&mut self, nth: usize) -> Option<String> {
        let locator = self.results.get(nth)?.item.locator();
        self.close();
        Some(locator)
    }

    fn refresh(&mut self) {
        self.results = match &self.corpus {
            CorpusState::Ready(index) => search(index, &self.query),
            // Not an error: queries against a not-yet-built index are
            // defined to produce nothing.
            CorpusState::Loading | CorpusState::Failed => Vec::new(),
        };
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
