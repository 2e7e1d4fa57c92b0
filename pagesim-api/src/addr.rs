//! Address and identifier newtypes
//!
//! Page size is a simulation parameter rather than a compile-time
//! constant, so the decomposition helpers take it as an argument instead
//! of shifting by a fixed page width.

use core::fmt;

/// A physical address (byte offset into simulated main memory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct PhysAddr(pub usize);

impl PhysAddr {
    /// Creates a new physical address from a raw usize value.
    pub const fn new(addr: usize) -> Self {
        Self(addr)
    }

    /// Returns the physical address as a raw usize value.
    pub const fn as_usize(self) -> usize {
        self.0
    }

    /// Returns the offset within the containing frame.
    pub const fn frame_offset(self, page_size: usize) -> usize {
        self.0 % page_size
    }

    /// Returns the frame index for this physical address.
    pub const fn frame_index(self, page_size: usize) -> usize {
        self.0 / page_size
    }
}

impl From<usize> for PhysAddr {
    fn from(addr: usize) -> Self {
        Self(addr)
    }
}

impl From<PhysAddr> for usize {
    fn from(addr: PhysAddr) -> Self {
        addr.0
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A logical address (byte offset into a job's address space)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct LogicalAddr(pub usize);

impl LogicalAddr {
    /// Creates a new logical address from a raw usize value.
    pub const fn new(addr: usize) -> Self {
        Self(addr)
    }

    /// Returns the logical address as a raw usize value.
    pub const fn as_usize(self) -> usize {
        self.0
    }

    /// Returns the page number for this logical address.
    pub const fn page(self, page_size: usize) -> usize {
        self.0 / page_size
    }

    /// Returns the offset within the containing page.
    pub const fn offset(self, page_size: usize) -> usize {
        self.0 % page_size
    }
}

impl From<usize> for LogicalAddr {
    fn from(addr: usize) -> Self {
        Self(addr)
    }
}

impl From<LogicalAddr> for usize {
    fn from(addr: LogicalAddr) -> Self {
        addr.0
    }
}

impl fmt::Display for LogicalAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a simulated job
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct JobId(pub u32);

impl JobId {
    /// Creates a new job identifier from a raw u32 value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the identifier as a raw u32 value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for JobId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J{}", self.0)
    }
}
