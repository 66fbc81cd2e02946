//! Shared test utilities and fixtures.

#![allow(dead_code)]

use talpa::{CorpusError, CorpusProvider, ItemKind, RawRecord, SearchItem};

/// A page item with pre-extracted body text, bypassing the extraction step.
pub fn page(id: &str, title: &str, slug: &str, content_text: &str) -> SearchItem {
    SearchItem {
        id: id.to_string(),
        title: title.to_string(),
        content_text: content_text.to_string(),
        kind: ItemKind::Page {
            slug: slug.to_string(),
        },
    }
}

/// A document item; body text is always empty by construction.
pub fn document(id: &str, title: &str, file_name: &str) -> SearchItem {
    SearchItem {
        id: id.to_string(),
        title: title.to_string(),
        content_text: String::new(),
        kind: ItemKind::Document {
            file_name: file_name.to_string(),
        },
    }
}

/// The canonical two-item portal corpus from the acceptance scenario.
pub fn portal_corpus() -> Vec<SearchItem> {
    vec![
        page("p1", "Parking Rules", "parking-rules", "no parking after 10pm"),
        document("d1", "Bylaws 2024", "bylaws.pdf"),
    ]
}

/// A page record carrying a rich-text body, the way a provider would send it.
pub fn page_record(id: &str, title: &str, slug: &str, body: &str) -> RawRecord {
    RawRecord::Page {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        body: body.to_string(),
        is_published: true,
    }
}

pub fn document_record(id: &str, title: &str, file_name: &str) -> RawRecord {
    RawRecord::Document {
        id: id.to_string(),
        title: title.to_string(),
        file_name: file_name.to_string(),
    }
}

/// Provider serving a fixed set of records.
pub struct StaticProvider(pub Vec<RawRecord>);

impl CorpusProvider for StaticProvider {
    fn fetch(&self) -> Result<Vec<RawRecord>, CorpusError> {
        Ok(self.0.clone())
    }
}

/// Provider whose fetch always fails, simulating a dead backend.
pub struct FailingProvider;

impl CorpusProvider for FailingProvider {
    fn fetch(&self) -> Result<Vec<RawRecord>, CorpusError> {
        Err(CorpusError::Fetch {
            reason: "connection refused".to_string(),
        })
    }
}

/// The record set behind [`portal_corpus`], for provider-driven tests.
pub fn portal_records() -> Vec<RawRecord> {
    vec![
        page_record(
            "p1",
            "Parking Rules",
            "parking-rules",
            r#"{"content":[{"text":"no parking after 10pm"}]}"#,
        ),
        document_record("d1", "Bylaws 2024", "bylaws.pdf"),
    ]
}
