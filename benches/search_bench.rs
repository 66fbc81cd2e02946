//! Benchmarks for index construction and query latency.
//!
//! Simulates realistic portal sizes:
//! - Small portal:  ~40 items   (a single housing association)
//! - Medium portal: ~200 items  (years of pages, news, and documents)
//! - Large portal:  ~800 items  (well past anything observed in production)
//!
//! Run with: cargo bench
//!
//! Queries must stay comfortably inside a keystroke budget (a few ms) at
//! every size, since the UI re-queries synchronously on every input event.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use talpa::{build_index, search, ItemKind, SearchIndex, SearchItem};

// ============================================================================
// PORTAL CORPUS SIMULATION
// ============================================================================

/// Portal size configurations.
struct PortalSize {
    name: &'static str,
    items: usize,
}

const PORTAL_SIZES: &[PortalSize] = &[
    PortalSize {
        name: "small",
        items: 40,
    },
    PortalSize {
        name: "medium",
        items: 200,
    },
    PortalSize {
        name: "large",
        items: 800,
    },
];

/// Vocabulary for plausible community-portal content.
const PORTAL_WORDS: &[&str] = &[
    "parking",
    "rules",
    "laundry",
    "schedule",
    "garden",
    "renovation",
    "board",
    "meeting",
    "minutes",
    "bylaws",
    "annual",
    "report",
    "garage",
    "storage",
    "waste",
    "recycling",
    "visitor",
    "permit",
    "maintenance",
    "notice",
    "quiet",
    "hours",
    "balcony",
    "elevator",
];

/// Queries spanning the match tiers: exact word, prefix, typo, miss.
const QUERIES: &[&str] = &["parking", "renov", "parkign", "zzzzzz"];

/// Deterministic synthetic corpus. Every third item is a document.
fn build_portal_corpus(items: usize) -> Vec<SearchItem> {
    (0..items)
        .map(|i| {
            let pick = |n: usize| PORTAL_WORDS[(i * 7 + n * 3) % PORTAL_WORDS.len()];
            let title = format!("{} {}", pick(0), pick(1));
            if i % 3 == 0 {
                SearchItem {
                    id: format!("d{}", i),
                    title,
                    content_text: String::new(),
                    kind: ItemKind::Document {
                        file_name: format!("file-{}.pdf", i),
                    },
                }
            } else {
                let content_text = (0..40).map(|n| pick(n)).collect::<Vec<_>>().join(" ");
                SearchItem {
                    id: format!("p{}", i),
                    title,
                    content_text,
                    kind: ItemKind::Page {
                        slug: format!("page-{}", i),
                    },
                }
            }
        })
        .collect()
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");
    for size in PORTAL_SIZES {
        let corpus = build_portal_corpus(size.items);
        group.bench_with_input(BenchmarkId::from_parameter(size.name), &corpus, |b, corpus| {
            b.iter(|| build_index(black_box(corpus.clone())));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for size in PORTAL_SIZES {
        let index: SearchIndex = build_index(build_portal_corpus(size.items));
        for &query in QUERIES {
            group.bench_with_input(
                BenchmarkId::new(size.name, query),
                &index,
                |b, index| {
                    b.iter(|| search(black_box(index), black_box(query)));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build_index, bench_search);
criterion_main!(benches);
