//! Canonical form of words before any comparison.
use smol_str::SmolStr;
use unicode_normalization::UnicodeNormalization;

use crate::constants::{
    BYTE_ORDER_MARK, FARSI_YEH, KEHEH, ZERO_WIDTH_JOINER, ZERO_WIDTH_NON_JOINER,
};

/// Returns true for the invisible code points that are dropped from words.
#[inline(always)]
pub fn is_invisible(ch: char) -> bool {
    matches!(ch, ZERO_WIDTH_NON_JOINER | ZERO_WIDTH_JOINER | BYTE_ORDER_MARK)
}

/// Maps letters that keyboard layouts for the script produce interchangeably
/// onto the single form used in the word list.
#[inline(always)]
fn fold_variant(ch: char) -> char {
    match ch {
        // ARABIC LETTER YEH, ARABIC LETTER ALEF MAKSURA
        '\u{064A}' | '\u{0649}' => FARSI_YEH,
        // ARABIC LETTER KAF
        '\u{0643}' => KEHEH,
        c => c,
    }
}

/// Normalizes a raw token.
///
/// Zero-width joiners, non-joiners and byte order marks are removed, the
/// remainder is canonically composed (NFC), orthographic letter variants are
/// folded and surrounding whitespace is trimmed. The result is idempotent:
/// `normalize(&normalize(x)) == normalize(x)`.
///
/// Empty and whitespace-only input yields an empty string.
pub fn normalize(raw: &str) -> SmolStr {
    let composed: String = raw
        .chars()
        .filter(|&c| !is_invisible(c))
        .nfc()
        .map(fold_variant)
        .collect();

    SmolStr::new(composed.trim())
}

/// Returns true if `raw` is already in normalized form.
pub fn is_normalized(raw: &str) -> bool {
    normalize(raw) == raw
}
