//! Persistence Gateway
//!
//! Flat-file snapshot of the lexicon.
//!
//! ## File Format
//! ```text
//! word: meaning1~meaning2~...
//! ```
//! One entry per line, entries in unspecified order. Loaded once at
//! startup, written once at controlled shutdown; there is no intermediate
//! durability, so a forced kill loses unsaved mutations.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::protocol::MEANING_SEPARATOR;
use crate::store::Lexicon;

/// Separator between the word and its meanings on a snapshot line
const KEY_SEPARATOR: char = ':';

/// Load a snapshot file into the store
///
/// A missing file is not an error; the store simply starts empty.
/// Malformed lines (blank, no separator, duplicate word) are logged and
/// skipped. Returns the number of entries loaded.
pub fn load(path: &Path, store: &Lexicon) -> Result<usize> {
    if !path.is_file() {
        tracing::warn!(
            "Dictionary file {} does not exist, starting with an empty dictionary",
            path.display()
        );
        return Ok(0);
    }

    let reader = BufReader::new(File::open(path)?);
    let mut loaded = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some((word, meanings_str)) = line.split_once(KEY_SEPARATOR) else {
            tracing::warn!("Skipping malformed line {}: no separator", line_no + 1);
            continue;
        };

        let word = word.trim();
        if word.is_empty() {
            tracing::warn!("Skipping malformed line {}: empty word", line_no + 1);
            continue;
        }

        // Stored verbatim apart from trimming; de-duplication is the
        // mutation path's job, not the loader's
        let meanings: Vec<String> = meanings_str
            .trim()
            .split(MEANING_SEPARATOR)
            .map(|m| m.trim().to_string())
            .collect();

        if store.insert_new(word, meanings) {
            loaded += 1;
        } else {
            tracing::warn!("Skipping line {}: duplicate word {:?}", line_no + 1, word);
        }
    }

    Ok(loaded)
}

/// Write the store to a snapshot file
///
/// One line per entry, meaning order preserved, entry order unspecified.
/// Returns the number of entries written.
pub fn save(path: &Path, store: &Lexicon) -> Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    let entries = store.entries();

    for (word, meanings) in &entries {
        writeln!(
            writer,
            "{}{} {}",
            word,
            KEY_SEPARATOR,
            meanings.join(&MEANING_SEPARATOR.to_string())
        )?;
    }

    writer.flush()?;
    Ok(entries.len())
}
