/// Candidates must be strictly closer than this to be suggested.
pub const ACCEPTANCE_THRESHOLD: usize = 3;
/// Number of suggestions returned when the caller does not ask for more.
pub const DEFAULT_N_BEST: usize = 5;

/// Dropped from words; keyboards insert it inconsistently.
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
/// Dropped from words, like the non-joiner.
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';
/// Dropped from words and from the start of word list files.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Replaces ARABIC LETTER YEH and ALEF MAKSURA.
pub const FARSI_YEH: char = '\u{06CC}';
/// Replaces ARABIC LETTER KAF.
pub const KEHEH: char = '\u{06A9}';

