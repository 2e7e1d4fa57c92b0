//! Error taxonomy for the paging simulator
//!
//! Two classes share one enum. User errors (`OffsetOutOfRange`,
//! `PageOutOfRange`, `UnknownJob`, `DuplicateJob`, `InvalidSize`) are
//! reported per request, mutate nothing, and the caller may retry with
//! corrected input. Internal errors (`InvalidState`, `NoVictimAvailable`)
//! mean the engine's bookkeeping invariants were broken; they are
//! asserted in tests and must never occur in normal operation.

use core::fmt;

use crate::addr::JobId;

/// Common error type used throughout the paging simulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Offset at or past the end of a page
    OffsetOutOfRange {
        /// The rejected offset
        offset: usize,
        /// The configured page size
        page_size: usize,
    },
    /// Page number at or past the end of the job's address space
    PageOutOfRange {
        /// The rejected page number
        page: usize,
        /// The job's page count
        num_pages: usize,
    },
    /// Job id not present in the registry
    UnknownJob(JobId),
    /// Job id registered twice
    DuplicateJob(JobId),
    /// Zero-valued size parameter at construction or registration
    InvalidSize {
        /// Which parameter was rejected
        what: &'static str,
    },
    /// Bookkeeping invariant breach (caller bug, not a user error)
    InvalidState(&'static str),
    /// Replacement tracker empty while no frame is free
    NoVictimAvailable,
}

impl Error {
    /// Whether this error is a per-request input error the caller may
    /// correct and retry, as opposed to an internal invariant breach.
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Error::InvalidState(_) | Error::NoVictimAvailable)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OffsetOutOfRange { offset, page_size } => {
                write!(f, "offset {} out of range for page size {}", offset, page_size)
            }
            Error::PageOutOfRange { page, num_pages } => {
                write!(f, "page {} out of range for job with {} pages", page, num_pages)
            }
            Error::UnknownJob(id) => write!(f, "unknown job {}", id),
            Error::DuplicateJob(id) => write!(f, "job {} already registered", id),
            Error::InvalidSize { what } => write!(f, "invalid size: {} must be non-zero", what),
            Error::InvalidState(msg) => write!(f, "invalid state: {}", msg),
            Error::NoVictimAvailable => write!(f, "no eviction victim available"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for operations that can fail
pub type Result<T> = core::result::Result<T, Error>;
