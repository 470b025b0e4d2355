//! Output management module
//!
//! Writes word lists as newline-delimited text and derives the artifact
//! names that sit next to the input file.

use crate::error::{Result, VocabError};
use crate::filter::WordPolicy;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for file writing (64KB)
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Suffix of the lowercase vocabulary list
pub const WORDS_SUFFIX: &str = ".words.output";
/// Suffix of the uppercase/capitalized vocabulary list
pub const ALL_CAPS_SUFFIX: &str = ".allCaps.output";
/// Suffix of the archive
pub const ARCHIVE_SUFFIX: &str = ".zip";
/// Suffix appended to the archive path for its checksum
pub const DIGEST_SUFFIX: &str = ".sha512";

/// Output file writer with buffering
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create a new output writer, truncating any existing file
    pub fn new(path: PathBuf, buffer_size: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| VocabError::write(&path, e))?;

        let writer = BufWriter::with_capacity(buffer_size, file);

        Ok(Self {
            writer,
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|e| VocabError::write(&self.path, e))?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Flush the buffer and sync the file to disk
    pub fn finish(mut self) -> Result<WriteSummary> {
        self.writer
            .flush()
            .and_then(|_| self.writer.get_ref().sync_all())
            .map_err(|e| VocabError::write(&self.path, e))?;

        Ok(WriteSummary {
            path: self.path.clone(),
            lines_written: self.lines_written,
            bytes_written: self.bytes_written,
        })
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// What a finished writer produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub lines_written: u64,
    pub bytes_written: u64,
}

/// Write `words` to `path`, one per line, replacing existing content
pub fn write_list<'a, I>(path: &Path, words: I) -> Result<WriteSummary>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut writer = OutputWriter::new(path.to_path_buf(), DEFAULT_BUFFER_SIZE)?;
    for word in words {
        writer.write_line(word)?;
    }
    writer.finish()
}

/// Append `suffix` to the full path string (`a/b.txt` -> `a/b.txt.zip`)
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Paths of every artifact derived from one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub input: PathBuf,
    pub words: PathBuf,
    pub all_caps: PathBuf,
    pub archive: PathBuf,
    pub digest: PathBuf,
}

impl ArtifactPaths {
    pub fn for_input(input: &Path) -> Self {
        let archive = with_suffix(input, ARCHIVE_SUFFIX);
        Self {
            input: input.to_path_buf(),
            words: with_suffix(input, WORDS_SUFFIX),
            all_caps: with_suffix(input, ALL_CAPS_SUFFIX),
            digest: with_suffix(&archive, DIGEST_SUFFIX),
            archive,
        }
    }

    /// List file written by a pass with the given policy
    pub fn list_for(&self, policy: WordPolicy) -> &Path {
        if policy.is_caps() {
            &self.all_caps
        } else {
            &self.words
        }
    }
}
