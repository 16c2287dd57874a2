//! Exit codes for the CLI tool.

use arcdump::Error;

/// Exit code constants
pub const SUCCESS: i32 = 0;
/// Fatal error occurred
pub const FATAL_ERROR: i32 = 2;
/// Archive format error
pub const BAD_ARCHIVE: i32 = 3;
/// I/O error
pub const IO_ERROR: i32 = 5;
/// Ctrl+C (128 + SIGINT)
pub const USER_INTERRUPT: i32 = 130;
/// Unsupported input file
pub const BAD_INPUT: i32 = 255;

/// Exit code enum for structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    FatalError,
    BadArchive,
    IoError,
    BadInput,
}

impl ExitCode {
    /// Returns the numeric exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::FatalError => FATAL_ERROR,
            Self::BadArchive => BAD_ARCHIVE,
            Self::IoError => IO_ERROR,
            Self::BadInput => BAD_INPUT,
        }
    }
}

/// Converts an arcdump error to an exit code
pub fn error_to_exit_code(error: &Error) -> ExitCode {
    match error {
        Error::Io(_) => ExitCode::IoError,
        Error::MalformedArchive { .. } | Error::EmptyArchive { .. } => ExitCode::BadArchive,
        #[cfg(feature = "sevenz")]
        Error::Decompression { .. } => ExitCode::BadArchive,
        Error::MalformedJson(_) => ExitCode::FatalError,
        Error::UnsupportedContainer { .. } => ExitCode::BadInput,
        // Future error variants - required by #[non_exhaustive]
        _ => ExitCode::FatalError,
    }
}
