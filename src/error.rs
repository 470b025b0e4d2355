//! Error types for the vocabulary pipeline
//!
//! Every stage reports its own failure kind so the caller can tell a missing
//! input apart from an unwritable list, a broken archive or a failed digest.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the core pipeline stages
#[derive(Debug, Error)]
pub enum VocabError {
    /// The text source could not be opened or read
    #[error("failed to read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A word list or checksum file could not be written
    #[error("failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An archive entry could not be read or the container could not be written
    #[error("failed to build archive {path:?}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The digest source could not be read
    #[error("failed to compute digest of {path:?}")]
    Digest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The hash implementation produced no usable result
    #[error("{algorithm} digest of {path:?} produced no result")]
    DigestUnavailable {
        path: PathBuf,
        algorithm: &'static str,
    },

    /// An intermediate artifact could not be removed during cleanup
    #[error("failed to remove {path:?}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl VocabError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }

    pub(crate) fn archive(path: impl Into<PathBuf>, source: impl Into<zip::result::ZipError>) -> Self {
        Self::Archive { path: path.into(), source: source.into() }
    }

    pub(crate) fn digest(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Digest { path: path.into(), source }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Filesystem { path: path.into(), source }
    }

    /// Short name of the failure kind, shown in front of error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read { .. } => "ReadError",
            Self::Write { .. } => "WriteError",
            Self::Archive { .. } => "ArchiveError",
            Self::Digest { .. } | Self::DigestUnavailable { .. } => "DigestError",
            Self::Filesystem { .. } => "FilesystemError",
        }
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let err = VocabError::read("in.txt", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), "ReadError");

        let err = VocabError::DigestUnavailable {
            path: PathBuf::from("in.txt.zip"),
            algorithm: "SHA-512",
        };
        assert_eq!(err.kind(), "DigestError");
        assert!(err.to_string().contains("SHA-512"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = VocabError::filesystem("list.output", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let source = err.source().expect("io source");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_message_leaves_cause_to_chain() {
        let err = VocabError::write("list.output", io::Error::new(io::ErrorKind::Other, "disk full"));

        assert_eq!(err.to_string(), "failed to write \"list.output\"");
        assert!(!err.to_string().contains("disk full"));
    }
}
