//! Per-job page tables

use pagesim_api::{Error, JobId, Result};

/// One job's mapping from page numbers to resident frames
///
/// Entries are `None` until the page is loaded and `Some(frame)` while
/// resident. The table never grows or shrinks after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTable {
    job: JobId,
    entries: Vec<Option<usize>>,
}

impl PageTable {
    /// Creates a table for `job` with `num_pages` entries, all absent.
    pub fn new(job: JobId, num_pages: usize) -> Self {
        PageTable {
            job,
            entries: vec![None; num_pages],
        }
    }

    /// Owning job of this table.
    pub fn job(&self) -> JobId {
        self.job
    }

    /// Number of pages in the job's address space.
    pub fn num_pages(&self) -> usize {
        self.entries.len()
    }

    /// Returns the frame holding `page`, or `None` if the page is not
    /// resident.
    pub fn lookup(&self, page: usize) -> Result<Option<usize>> {
        self.entries
            .get(page)
            .copied()
            .ok_or(Error::PageOutOfRange {
                page,
                num_pages: self.entries.len(),
            })
    }

    /// Records that `page` now resides in `frame`. The entry must have
    /// been absent.
    pub fn bind(&mut self, page: usize, frame: usize) -> Result<()> {
        let entry = self.entry_mut(page)?;
        if entry.is_some() {
            return Err(Error::InvalidState("bind of an already-resident page"));
        }
        *entry = Some(frame);
        Ok(())
    }

    /// Clears the entry for `page` and returns the frame it was bound
    /// to. The entry must have been present.
    pub fn unbind(&mut self, page: usize) -> Result<usize> {
        self.entry_mut(page)?
            .take()
            .ok_or(Error::InvalidState("unbind of a non-resident page"))
    }

    /// Number of currently resident pages.
    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Iterates over `(page, frame_or_absent)` pairs in page order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.entries.iter().copied().enumerate()
    }

    fn entry_mut(&mut self, page: usize) -> Result<&mut Option<usize>> {
        let num_pages = self.entries.len();
        self.entries
            .get_mut(page)
            .ok_or(Error::PageOutOfRange { page, num_pages })
    }
}
