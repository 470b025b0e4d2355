//! Token extraction
//!
//! Text is read line by line and each line is split on whitespace, so a
//! token never spans a line break. Accepted tokens keep their source order
//! and duplicates.

use crate::encoding::LineReader;
use crate::error::{Result, VocabError};
use crate::filter::WordFilter;
use std::io::BufRead;
use std::path::Path;

/// Counters collected while extracting one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub lines: u64,
    pub tokens: u64,
    pub accepted: u64,
}

/// Whether `c` separates tokens
///
/// Unicode whitespace minus the no-break spaces (U+00A0, U+2007, U+202F) and
/// NEL (U+0085), plus the information separators U+001C..=U+001F.
pub fn is_token_delimiter(c: char) -> bool {
    match c {
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{1C}'..='\u{1F}' => true,
        _ => c.is_whitespace(),
    }
}

/// Words accepted by a filter, in source order
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub words: Vec<String>,
    pub stats: ExtractStats,
}

/// Extract every word of `path` accepted by `filter`
///
/// A read failure anywhere in the file discards everything gathered so far.
pub fn extract_words(path: &Path, filter: &WordFilter) -> Result<Extraction> {
    let lines = LineReader::open(path).map_err(|e| VocabError::read(path, e))?;
    extract_lines(lines, filter).map_err(|e| VocabError::read(path, e))
}

/// Extract words from an already decoded line source
pub fn extract_lines<I>(lines: I, filter: &WordFilter) -> std::io::Result<Extraction>
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut extraction = Extraction::default();

    for line in lines {
        let line = line?;
        extraction.stats.lines += 1;

        for token in line.split(is_token_delimiter).filter(|t| !t.is_empty()) {
            extraction.stats.tokens += 1;
            if filter.matches(token) {
                extraction.stats.accepted += 1;
                extraction.words.push(token.to_owned());
            }
        }
    }

    Ok(extraction)
}

/// Extract words from any buffered reader (UTF-8 detection included)
pub fn extract_from_reader<R: BufRead>(reader: R, filter: &WordFilter) -> std::io::Result<Extraction> {
    extract_lines(LineReader::new(reader)?, filter)
}
