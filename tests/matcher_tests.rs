//! Similarity matcher tests

use lexd::matcher::{find_best_match, levenshtein};

// =============================================================================
// Edit Distance
// =============================================================================

#[test]
fn test_distance_classic_example() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
}

#[test]
fn test_distance_identity() {
    for s in ["", "a", "cat", "dictionary"] {
        assert_eq!(levenshtein(s, s), 0);
    }
}

#[test]
fn test_distance_symmetry() {
    let pairs = [("cat", "cta"), ("kitten", "sitting"), ("", "abc"), ("flaw", "lawn")];
    for (a, b) in pairs {
        assert_eq!(levenshtein(a, b), levenshtein(b, a));
    }
}

#[test]
fn test_distance_against_empty_is_length() {
    assert_eq!(levenshtein("", "hello"), 5);
    assert_eq!(levenshtein("hello", ""), 5);
}

#[test]
fn test_distance_single_edits() {
    assert_eq!(levenshtein("cat", "cart"), 1); // insertion
    assert_eq!(levenshtein("cart", "cat"), 1); // deletion
    assert_eq!(levenshtein("cat", "bat"), 1); // substitution
    assert_eq!(levenshtein("cat", "cta"), 2); // transposition costs two
}

// =============================================================================
// Best-Match Selection
// =============================================================================

fn candidates(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_best_match_picks_smallest_distance() {
    let result = find_best_match("cat", candidates(&["dog", "cart", "ca"]), 2);
    // "ca" and "cart" are both at distance 1; lexicographic tie-break
    assert_eq!(result.as_deref(), Some("ca"));

    let result = find_best_match("cat", candidates(&["dog", "cart"]), 2);
    assert_eq!(result.as_deref(), Some("cart"));
}

#[test]
fn test_best_match_respects_threshold() {
    assert_eq!(find_best_match("cat", candidates(&["elephant", "giraffe"]), 2), None);
    // Distance exactly at the threshold is accepted
    assert_eq!(
        find_best_match("cat", candidates(&["cta"]), 2).as_deref(),
        Some("cta")
    );
}

#[test]
fn test_best_match_tie_break_is_deterministic() {
    // Both at distance 1 from "cat"; order of candidates must not matter
    let forward = find_best_match("cat", candidates(&["bat", "hat"]), 2);
    let backward = find_best_match("cat", candidates(&["hat", "bat"]), 2);
    assert_eq!(forward.as_deref(), Some("bat"));
    assert_eq!(forward, backward);
}

#[test]
fn test_best_match_empty_candidates() {
    assert_eq!(find_best_match("cat", candidates(&[]), 2), None);
}
