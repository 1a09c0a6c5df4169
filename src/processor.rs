//! Request Processor
//!
//! Pure routing from a parsed request to a response.
//!
//! ## Responsibilities
//! - Validate required fields per request kind
//! - Apply business rules (existence checks, duplicate detection)
//! - Route reads/writes to the lexicon store
//! - Fall back to fuzzy matching when an exact query lookup misses
//!
//! No state is retained between calls; every response is a function of the
//! store's current contents and the request alone. All mutation happens
//! through the store's atomic structural operations or inside a single
//! per-entry `mutate` call, so no request ever leaves a half-applied
//! change behind (update's rollback is performed under the same entry
//! lock that observed the conflict).

use crate::matcher;
use crate::protocol::{Request, RequestKind, Response, MEANING_SEPARATOR};
use crate::store::Lexicon;

/// Process one request against the store
pub fn process(store: &Lexicon, max_distance: usize, request: Request) -> Response {
    match request.request_kind() {
        Some(RequestKind::Query) => query(store, max_distance, &request),
        Some(RequestKind::Add) => add(store, request),
        Some(RequestKind::Remove) => remove(store, &request),
        Some(RequestKind::Update) => update(store, &request),
        Some(RequestKind::AddMeaning) => add_meaning(store, &request),
        None => Response::error("Unknown command type."),
    }
}

/// A field counts as present only if it has non-whitespace content
fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Trim, drop empties, and de-duplicate preserving first occurrence
fn sanitize_meanings<I>(raw: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for meaning in raw {
        let trimmed = meaning.as_ref().trim();
        if trimmed.is_empty() || out.iter().any(|m| m == trimmed) {
            continue;
        }
        out.push(trimmed.to_string());
    }
    out
}

// =============================================================================
// Request Kind Handlers
// =============================================================================

fn query(store: &Lexicon, max_distance: usize, request: &Request) -> Response {
    let Some(word) = required(&request.word) else {
        return Response::error("Word not provided.");
    };

    match store.get(word) {
        Some(meanings) => Response::success_with_data("Query successful.", meanings),
        None => {
            // No exact match; suggest the nearest known word, if any
            match matcher::find_best_match(word, store.words(), max_distance) {
                Some(similar) => {
                    Response::error(format!("Word not found.\nSimilar word found: {similar}"))
                }
                None => Response::error("Word not found."),
            }
        }
    }
}

fn add(store: &Lexicon, request: Request) -> Response {
    let Some(word) = required(&request.word) else {
        return Response::error("Invalid add request. Word and meanings required.");
    };
    // Clients de-duplicate before sending, but nothing here relies on it
    let meanings = sanitize_meanings(request.meanings.as_deref().unwrap_or_default());
    if meanings.is_empty() {
        return Response::error("Invalid add request. Word and meanings required.");
    }

    if store.insert_new(word, meanings) {
        Response::success("Word added successfully.")
    } else {
        Response::error("Word already exists.")
    }
}

fn remove(store: &Lexicon, request: &Request) -> Response {
    let Some(word) = required(&request.word) else {
        return Response::error("Word not provided.");
    };

    if store.remove(word) {
        Response::success("Word removed successfully.")
    } else {
        Response::error("Word not found.")
    }
}

fn update(store: &Lexicon, request: &Request) -> Response {
    let (Some(word), Some(old_meaning), Some(new_meaning)) = (
        required(&request.word),
        required(&request.old_meaning),
        required(&request.new_meaning),
    ) else {
        return Response::error("Invalid update request. Word, oldMeaning, and newMeaning required.");
    };

    let candidates = sanitize_meanings(new_meaning.split(MEANING_SEPARATOR));

    store
        .mutate(word, |meanings| {
            let Some(old_index) = meanings.iter().position(|m| m == old_meaning) else {
                return Response::error("Old meaning not found.");
            };

            meanings.remove(old_index);

            let mut added: Vec<String> = Vec::new();
            for candidate in &candidates {
                if !meanings.iter().any(|m| m == candidate) {
                    meanings.push(candidate.clone());
                    added.push(candidate.clone());
                }
            }

            if added.is_empty() {
                // Every candidate already existed; restore the old meaning
                // at its original position so the entry is untouched
                meanings.insert(old_index, old_meaning.to_string());
                Response::error(
                    "No new meaning was added because all provided new meanings already exist.",
                )
            } else {
                Response::success(format!(
                    "Old meaning replaced.\nNew meanings added: {}",
                    added.join("; ")
                ))
            }
        })
        .unwrap_or_else(|| Response::error("Word not found."))
}

fn add_meaning(store: &Lexicon, request: &Request) -> Response {
    let (Some(word), Some(meaning)) = (required(&request.word), required(&request.meaning)) else {
        return Response::error("Invalid addMeaning request. Word and meaning required.");
    };

    store
        .mutate(word, |meanings| {
            if meanings.iter().any(|m| m == meaning) {
                Response::error(format!("Meaning already exists: {meaning}"))
            } else {
                meanings.push(meaning.to_string());
                Response::success(format!("Meaning added successfully: {meaning}"))
            }
        })
        .unwrap_or_else(|| Response::error("Word not found."))
}
