// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text extraction from rich-text page bodies.
//!
//! Page bodies are stored as the editor's JSON document tree: each node may
//! carry a `text` leaf and/or a `content` array of children. The walk
//! concatenates leaf text in document order, appending a single space after
//! every leaf and after every child subtree. A subtree that contributes
//! nothing still appends its separator, so consecutive spaces show up in the
//! output. Downstream normalization collapses whitespace, and consumers
//! depend on the concatenation staying exactly like this - resist the urge
//! to tidy it.
//!
//! Failure is always contained to the one item being extracted: a body that
//! is not JSON, carries a non-array `content`, or nests absurdly deep yields
//! `""` and the item stays in the corpus, matchable by title alone.

use serde_json::Value;
use tracing::debug;

/// Trees nested deeper than this are treated as malformed input rather than
/// walked to the bottom. Editor output tops out around a dozen levels.
const MAX_DEPTH: usize = 64;

/// Marker for bodies the walk cannot make sense of.
struct Malformed;

/// Extract the plain text of a rich-text body.
///
/// Returns the concatenated leaf text, or `""` when the body cannot be
/// extracted. Never panics, never fails the surrounding corpus build.
pub fn extract_text(body: &str) -> String {
    let root: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, "page body is not JSON, indexing title only");
            return String::new();
        }
    };

    match collect_text(&root, 0) {
        Ok(text) => text,
        Err(Malformed) => {
            debug!("page body tree is malformed, indexing title only");
            String::new()
        }
    }
}

/// Pre-order walk of one node. Each level trims its own result before the
/// parent appends it, which is where the mid-string double spaces come from.
fn collect_text(node: &Value, depth: usize) -> Result<String, Malformed> {
    if depth >= MAX_DEPTH {
        return Err(Malformed);
    }

    let mut text = String::new();
    if let Some(children) = node.get("content").filter(|v| is_present(v)) {
        let children = children.as_array().ok_or(Malformed)?;
        for child in children {
            if let Some(leaf) = child.get("text").and_then(Value::as_str) {
                if !leaf.is_empty() {
                    text.push_str(leaf);
                    text.push(' ');
                }
            }
            if child.get("content").is_some_and(is_present) {
                text.push_str(&collect_text(child, depth + 1)?);
                text.push(' ');
            }
        }
    }

    Ok(text.trim().to_string())
}

/// Whether a `content` value counts as present: `null`, `false`, `0`, and
/// `""` do not. Arrays (empty ones included) and objects do.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
