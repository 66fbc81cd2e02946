// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: normalized snapshots of every item's match fields.
//!
//! There is deliberately no incremental update path. The corpus is fetched
//! once per session and treated as immutable, so the index is built exactly
//! once per snapshot and queries only ever read it.

use crate::types::SearchItem;
use crate::utils::normalize;

/// A built index over one corpus snapshot.
///
/// Holds the items in source order plus each item's normalized title and
/// body text, so per-keystroke queries never re-normalize the corpus.
/// Construction is pure: the same corpus always yields the same index.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    items: Vec<SearchItem>,
    titles: Vec<String>,
    contents: Vec<String>,
}

/// Build an index over a corpus snapshot.
pub fn build_index(corpus: Vec<SearchItem>) -> SearchIndex {
    let titles = corpus.iter().map(|item| normalize(&item.title)).collect();
    let contents = corpus
        .iter()
        .map(|item| normalize(&item.content_text))
        .collect();
    SearchIndex {
        items: corpus,
        titles,
        contents,
    }
}

impl SearchIndex {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The indexed items, in source order.
    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    /// Iterate items alongside their normalized field snapshots.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&SearchItem, &str, &str)> {
        self.items
            .iter()
            .zip(&self.titles)
            .zip(&self.contents)
            .map(|((item, title), content)| (item, title.as_str(), content.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;

    fn item(id: &str, title: &str, content_text: &str) -> SearchItem {
        SearchItem {
            id: id.to_string(),
            title: title.to_string(),
            content_text: content_text.to_string(),
            kind: ItemKind::Page {
                slug: id.to_string(),
            },
        }
    }

    #[test]
    fn test_snapshots_are_normalized() {
        let index = build_index(vec![item("p1", "  Parking  RULES ", "Efter 10 PÅ KVÄLLEN")]);
        let (_, title, content) = index.entries().next().unwrap();
        assert_eq!(title, "parking rules");
        assert_eq!(content, "efter 10 pa kvallen");
    }

    #[test]
    fn test_preserves_source_order() {
        let index = build_index(vec![item("b", "B", ""), item("a", "A", "")]);
        let ids: Vec<&str> = index.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_empty_corpus_builds_empty_index() {
        let index = build_index(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.entries().count(), 0);
    }
}
