//! Similarity Matcher
//!
//! Edit distance and best-match selection for the fuzzy lookup fallback.
//!
//! Pure functions, no shared state.

/// Levenshtein distance between two strings
///
/// Insertion, deletion, and substitution each cost 1. Computed over a full
/// (|a|+1) × (|b|+1) dynamic-programming table on Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    dp[a.len()][b.len()]
}

/// Select the closest candidate to `target` within `max_distance`
///
/// Scans all candidates and keeps the one with the smallest distance.
/// Ties resolve to the lexicographically smallest candidate, so the result
/// is deterministic even though the store iterates its keys in an
/// unspecified order.
pub fn find_best_match(
    target: &str,
    candidates: impl IntoIterator<Item = String>,
    max_distance: usize,
) -> Option<String> {
    let mut best: Option<(usize, String)> = None;

    for candidate in candidates {
        let distance = levenshtein(target, &candidate);
        if distance > max_distance {
            continue;
        }
        let better = match &best {
            None => true,
            Some((best_distance, best_word)) => {
                distance < *best_distance
                    || (distance == *best_distance && candidate < *best_word)
            }
        };
        if better {
            best = Some((distance, candidate));
        }
    }

    best.map(|(_, word)| word)
}
