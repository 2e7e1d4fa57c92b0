//! Pagesim API - Core types for the demand-paging simulator
//!
//! This crate provides the foundation shared by the simulator crates:
//! address and identifier newtypes, and the common error taxonomy with
//! its `Result` alias. It has no dependencies and no policy logic; the
//! paging engine itself lives in `pagesim-paging`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod addr;
pub mod error;

pub use addr::{JobId, LogicalAddr, PhysAddr};
pub use error::{Error, Result};
