//! Zip packaging of the generated artifacts
//!
//! Each source is streamed into the container through a fixed-size buffer.
//! Entries are named by the source path string and keep the input order.
//! Timestamps and permissions are fixed so identical inputs give identical
//! archive bytes.

use crate::error::{Result, VocabError};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Chunk size used when copying entry data
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Summary of a written archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub path: PathBuf,
    pub entries: Vec<String>,
    pub uncompressed_bytes: u64,
    pub archive_bytes: u64,
}

/// Name under which a source path is stored in the archive
pub fn entry_name(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

/// Bundle `sources` into a zip archive at `destination`
///
/// A failure leaves whatever was already written at `destination` in place.
pub fn archive_files<P: AsRef<Path>>(sources: &[P], destination: &Path) -> Result<ArchiveSummary> {
    let file = File::create(destination).map_err(|e| VocabError::archive(destination, e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = entry_options();

    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut entries = Vec::with_capacity(sources.len());
    let mut uncompressed_bytes = 0u64;

    for source in sources {
        let source = source.as_ref();
        let mut input = File::open(source).map_err(|e| VocabError::archive(source, e))?;

        let name = entry_name(source);
        zip.start_file(name.as_str(), options)
            .map_err(|e| VocabError::archive(destination, e))?;

        loop {
            let n = input.read(&mut buffer).map_err(|e| VocabError::archive(source, e))?;
            if n == 0 {
                break;
            }
            zip.write_all(&buffer[..n])
                .map_err(|e| VocabError::archive(destination, e))?;
            uncompressed_bytes += n as u64;
        }

        log::debug!("archived {:?}", name);
        entries.push(name);
    }

    let mut writer = zip.finish().map_err(|e| VocabError::archive(destination, e))?;
    writer.flush().map_err(|e| VocabError::archive(destination, e))?;

    let archive_bytes = writer
        .get_ref()
        .metadata()
        .map_err(|e| VocabError::archive(destination, e))?
        .len();

    Ok(ArchiveSummary {
        path: destination.to_path_buf(),
        entries,
        uncompressed_bytes,
        archive_bytes,
    })
}
