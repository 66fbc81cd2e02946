//! Utility functions for string processing.

use unicode_normalization::UnicodeNormalization;

/// Fold a string into its searchable form: NFD-decompose, drop combining
/// marks, lowercase, and collapse whitespace runs to single spaces.
///
/// Indexed fields and query terms both pass through here, so accented and
/// plain spellings land on the same bytes no matter which side the accents
/// came from:
/// - "Café" → "cafe"
/// - "GÅRDEN" → "garden"
/// - "naïve  approach" → "naive approach"
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
