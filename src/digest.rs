//! SHA-512 checksum of the archive
//!
//! The source is hashed in fixed-size chunks and the lowercase hex digest is
//! written, newline terminated, to `<source>.sha512`.

use crate::archive::CHUNK_SIZE;
use crate::error::{Result, VocabError};
use crate::output::{with_suffix, DIGEST_SUFFIX};
use sha2::{Digest, Sha512};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Name of the hash algorithm, as reported in errors
pub const ALGORITHM: &str = "SHA-512";

/// Length of the hex-encoded digest
pub const DIGEST_HEX_LEN: usize = 128;

/// A computed checksum and the file it was written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSummary {
    pub source: PathBuf,
    pub path: PathBuf,
    pub hex: String,
}

/// Hash everything `reader` yields
pub fn digest_reader<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut hasher = Sha512::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the hex digest of the file at `path`
pub fn file_digest(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| VocabError::digest(path, e))?;
    let hex = digest_reader(file).map_err(|e| VocabError::digest(path, e))?;

    if hex.len() != DIGEST_HEX_LEN {
        return Err(VocabError::DigestUnavailable {
            path: path.to_path_buf(),
            algorithm: ALGORITHM,
        });
    }

    Ok(hex)
}

/// Hash `source` and write the digest to its `.sha512` sibling
pub fn write_digest(source: &Path) -> Result<DigestSummary> {
    let hex = file_digest(source)?;
    let path = with_suffix(source, DIGEST_SUFFIX);

    std::fs::write(&path, format!("{}\n", hex)).map_err(|e| VocabError::write(&path, e))?;

    Ok(DigestSummary {
        source: source.to_path_buf(),
        path,
        hex,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    const EMPTY_SHA512: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                                47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    const ABC_SHA512: &str = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                              2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";

    #[test]
    fn test_known_vectors() {
        assert_eq!(digest_reader(Cursor::new(b"")).unwrap(), EMPTY_SHA512);
        assert_eq!(digest_reader(Cursor::new(b"abc")).unwrap(), ABC_SHA512);
    }

    #[test]
    fn test_chunked_matches_one_shot() {
        let data: Vec<u8> = (0..(CHUNK_SIZE * 3 + 5)).map(|i| (i % 251) as u8).collect();
        let expected = hex::encode(Sha512::digest(&data));

        assert_eq!(digest_reader(Cursor::new(&data)).unwrap(), expected);
    }

    #[test]
    fn test_deterministic_and_sensitive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"vocabulary").unwrap();

        let first = file_digest(&path).unwrap();
        let second = file_digest(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), DIGEST_HEX_LEN);
        assert!(first.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));

        std::fs::write(&path, b"vocabularz").unwrap();
        assert_ne!(file_digest(&path).unwrap(), first);
    }

    #[test]
    fn test_write_digest_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("book.txt.zip");
        std::fs::write(&source, b"abc").unwrap();

        let summary = write_digest(&source).unwrap();

        assert_eq!(summary.path, dir.path().join("book.txt.zip.sha512"));
        assert_eq!(summary.hex, ABC_SHA512);
        assert_eq!(std::fs::read_to_string(&summary.path).unwrap(), format!("{}\n", ABC_SHA512));
    }

    #[test]
    fn test_missing_source() {
        let dir = TempDir::new().unwrap();
        let err = write_digest(&dir.path().join("absent.zip")).unwrap_err();

        assert!(matches!(err, VocabError::Digest { .. }));
        assert!(!dir.path().join("absent.zip.sha512").exists());
    }

    #[test]
    fn test_unwritable_checksum_is_write_error() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("book.txt.zip");
        std::fs::write(&source, b"abc").unwrap();
        std::fs::create_dir(dir.path().join("book.txt.zip.sha512")).unwrap();

        let err = write_digest(&source).unwrap_err();

        assert!(matches!(err, VocabError::Write { .. }));
    }
}
