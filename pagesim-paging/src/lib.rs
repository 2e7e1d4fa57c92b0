//! Pagesim Paging
//!
//! This crate provides the demand-paging simulation engine: a fixed
//! pool of physical frames, per-job page tables, and logical-to-physical
//! address translation with page-fault handling under FIFO or LRU
//! replacement.
//!
//! The engine models one MMU serving one request at a time: every
//! resolution is synchronous and runs to completion. Input parsing,
//! prompting, and table printing are caller concerns; the engine's
//! boundary is [`PagingEngine`] plus the read-only snapshot types.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export API types
pub use pagesim_api::{Error, JobId, LogicalAddr, PhysAddr, Result};

// Paging engine modules
pub mod engine;
pub mod frame;
pub mod job;
pub mod page_table;
pub mod replacer;
pub mod stats;

// Re-export commonly used types
pub use engine::{FrameSnapshot, PageMapping, PagingEngine};
pub use frame::{Frame, FrameStore, PageRef};
pub use job::{Job, JobRegistry};
pub use page_table::PageTable;
pub use replacer::{FifoReplacer, LruReplacer, Policy, Replacer};
pub use stats::PagingStats;
