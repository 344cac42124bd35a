//! Levenshtein edit distance over Unicode scalar values.
//!
//! Insertions, deletions and substitutions each cost one. Transpositions are
//! not a primitive operation, so `"ab"` to `"ba"` costs two.

/// Computes the exact edit distance between `a` and `b`.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    row_distance(&a, &b, usize::MAX).unwrap_or_else(|| a.len().max(b.len()))
}

/// Computes the edit distance between `a` and `b` if it is at most `bound`.
///
/// Returns `None` as soon as the distance is known to exceed `bound`, which
/// is what makes scanning a whole word list for close candidates cheap.
pub fn bounded_levenshtein(a: &str, b: &str, bound: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    row_distance(&a, &b, bound)
}

pub(crate) fn bounded_levenshtein_chars(a: &[char], b: &[char], bound: usize) -> Option<usize> {
    row_distance(a, b, bound)
}

fn row_distance(a: &[char], b: &[char], bound: usize) -> Option<usize> {
    // Keep the shorter string along the row.
    let (a, b) = if a.len() < b.len() { (b, a) } else { (a, b) };

    if a.len() - b.len() > bound {
        return None;
    }

    if b.is_empty() {
        return Some(a.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        let mut row_min = cur[0];

        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let value = (prev[j] + cost).min(prev[j + 1] + 1).min(cur[j] + 1);
            cur[j + 1] = value;
            row_min = row_min.min(value);
        }

        // Every path to the last cell passes through this row.
        if row_min > bound {
            return None;
        }

        std::mem::swap(&mut prev, &mut cur);
    }

    let distance = prev[b.len()];
    if distance > bound {
        None
    } else {
        Some(distance)
    }
}
