//! Error types for archive dumping operations.
//!
//! This module provides the [`Error`] enum covering the failure modes of
//! walking and rendering ArcGIS archives, along with a convenient
//! [`Result<T>`] type alias.
//!
//! Only conditions that abort a whole walk surface here. Recoverable
//! conditions (bytes that are not valid UTF-8, XML that fails to parse)
//! degrade inside the renderer with a log message and never become an
//! `Error`.

use std::io;
use std::path::PathBuf;

/// The main error type for archive dumping operations.
///
/// Archive-level variants ([`MalformedArchive`][Self::MalformedArchive],
/// [`EmptyArchive`][Self::EmptyArchive],
/// [`Decompression`][Self::Decompression]) are fatal for the walk that
/// raised them: no member output beyond what was already written is
/// produced, and the error is re-raised to the caller after diagnostic
/// logging. [`MalformedJson`][Self::MalformedJson] propagates because JSON
/// classification by suffix is treated as reliable; XML failures, by
/// contrast, are handled leniently inside the renderer and never reach
/// this type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container cannot be opened as a zip archive.
    ///
    /// Opening is all-or-nothing: a corrupt signature or truncated central
    /// directory fails the whole walk with no partial member recovery.
    #[error("malformed archive {}: {source}", path.display())]
    MalformedArchive {
        /// The container that failed to open.
        path: PathBuf,
        /// The underlying zip error.
        #[source]
        source: zip::result::ZipError,
    },

    /// 7-Zip extraction yielded no members.
    ///
    /// An empty extraction signals an unexpected or invalid 7-Zip payload
    /// rather than a legitimately empty container.
    #[error("archive {} contains no members", path.display())]
    EmptyArchive {
        /// The container that produced no members.
        path: PathBuf,
    },

    /// The 7-Zip backend signaled a decompression failure.
    ///
    /// There is no retry; the walk aborts at the failing member.
    #[cfg(feature = "sevenz")]
    #[error("failed to decompress {}: {source}", path.display())]
    Decompression {
        /// The container being decompressed.
        path: PathBuf,
        /// The underlying backend error.
        #[source]
        source: sevenz_rust::Error,
    },

    /// Content classified as JSON failed to parse.
    ///
    /// Raised by the renderer once it has committed to "this is text";
    /// there is no silent fallback at that stage.
    #[error("malformed JSON content: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// The input file is not a container this tool can walk.
    #[error("{}: this archive type is not supported", path.display())]
    UnsupportedContainer {
        /// The rejected input file.
        path: PathBuf,
    },
}

impl Error {
    /// Returns `true` if this error aborted an archive walk.
    ///
    /// Archive errors indicate the container itself could not be processed,
    /// as opposed to a data error in one member's content.
    pub fn is_archive_error(&self) -> bool {
        match self {
            Error::MalformedArchive { .. } | Error::EmptyArchive { .. } => true,
            #[cfg(feature = "sevenz")]
            Error::Decompression { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this error was caused by member content rather
    /// than the container.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Error::MalformedJson(_))
    }

    /// Returns the container path associated with this error, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::MalformedArchive { path, .. } => Some(path),
            Error::EmptyArchive { path } => Some(path),
            #[cfg(feature = "sevenz")]
            Error::Decompression { path, .. } => Some(path),
            Error::UnsupportedContainer { path } => Some(path),
            _ => None,
        }
    }
}

/// A specialized Result type for archive dumping operations.
pub type Result<T> = std::result::Result<T, Error>;
