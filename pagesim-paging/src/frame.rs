//! Physical frame pool
//!
//! `FrameStore` is a pure occupancy ledger: it knows which frame holds
//! which (job, page) pair and nothing about replacement policy. Each
//! frame records its occupant directly, so eviction can find the owning
//! job in O(1) instead of scanning every job's page table.

use pagesim_api::{Error, JobId, Result};

/// The (job, page) pair resident in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef {
    /// Owning job
    pub job: JobId,
    /// Page number within the owning job
    pub page: usize,
}

impl PageRef {
    /// Creates a new page reference.
    pub const fn new(job: JobId, page: usize) -> Self {
        Self { job, page }
    }
}

/// A single frame of simulated main memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Index of this frame in the pool
    pub index: usize,
    /// Resident page, or `None` while free
    pub occupant: Option<PageRef>,
}

/// The fixed-size pool of physical frames
#[derive(Debug, Clone)]
pub struct FrameStore {
    frames: Vec<Frame>,
}

impl FrameStore {
    /// Creates a pool of `frame_count` frames, all free.
    pub fn new(frame_count: usize) -> Self {
        let frames = (0..frame_count)
            .map(|index| Frame {
                index,
                occupant: None,
            })
            .collect();
        FrameStore { frames }
    }

    /// Returns the lowest-indexed free frame, or `None` when memory is
    /// full. No side effects.
    pub fn find_free(&self) -> Option<usize> {
        self.frames
            .iter()
            .find(|f| f.occupant.is_none())
            .map(|f| f.index)
    }

    /// Marks `frame` as holding `occupant`. The frame must be free.
    pub fn occupy(&mut self, frame: usize, occupant: PageRef) -> Result<()> {
        let slot = self.slot_mut(frame)?;
        if slot.occupant.is_some() {
            return Err(Error::InvalidState("occupy of a non-free frame"));
        }
        slot.occupant = Some(occupant);
        Ok(())
    }

    /// Frees `frame` and returns the page it held. The frame must be
    /// occupied.
    pub fn vacate(&mut self, frame: usize) -> Result<PageRef> {
        let slot = self.slot_mut(frame)?;
        slot.occupant
            .take()
            .ok_or(Error::InvalidState("vacate of a free frame"))
    }

    /// Whether `frame` currently holds a page. Out-of-range indices
    /// report as unoccupied.
    pub fn is_occupied(&self, frame: usize) -> bool {
        self.frames
            .get(frame)
            .is_some_and(|f| f.occupant.is_some())
    }

    /// Returns the occupant of `frame`, if any.
    pub fn occupant(&self, frame: usize) -> Option<PageRef> {
        self.frames.get(frame).and_then(|f| f.occupant)
    }

    /// Total number of frames in the pool.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of currently occupied frames.
    pub fn occupied_count(&self) -> usize {
        self.frames.iter().filter(|f| f.occupant.is_some()).count()
    }

    /// Iterates over all frames in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    fn slot_mut(&mut self, frame: usize) -> Result<&mut Frame> {
        self.frames
            .get_mut(frame)
            .ok_or(Error::InvalidState("frame index out of range"))
    }
}
