//! The paging engine
//!
//! `PagingEngine` owns the frame pool, every job's page table, and the
//! replacement tracker as one aggregate, and is the only component that
//! mutates them. Each resolution runs to completion before the next
//! begins; a caller wanting concurrent simulation must wrap the whole
//! engine in one mutual-exclusion scope, because eviction touches a
//! different job's page table than the requesting job's.

use log::{debug, trace};
use pagesim_api::{Error, JobId, LogicalAddr, PhysAddr, Result};

use crate::frame::{FrameStore, PageRef};
use crate::job::{Job, JobRegistry};
use crate::replacer::{Policy, Replacer};
use crate::stats::PagingStats;

/// One frame's state as seen by a display collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSnapshot {
    /// Frame index
    pub frame: usize,
    /// Resident page, or `None` while free
    pub occupant: Option<PageRef>,
}

/// One page-table entry as seen by a display collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMapping {
    /// Page number
    pub page: usize,
    /// Frame holding the page, or `None` while absent
    pub frame: Option<usize>,
}

/// Demand-paging engine: translation, fault handling, and eviction
pub struct PagingEngine {
    frames: FrameStore,
    jobs: JobRegistry,
    replacer: Box<dyn Replacer>,
    page_size: usize,
    stats: PagingStats,
}

impl std::fmt::Debug for PagingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagingEngine")
            .field("frames", &self.frames)
            .field("jobs", &self.jobs)
            .field("page_size", &self.page_size)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl PagingEngine {
    /// Creates an engine with `frame_count` frames of `page_size` bytes
    /// each, evicting under `policy`. The policy is fixed for the life
    /// of the engine.
    pub fn new(frame_count: usize, page_size: usize, policy: Policy) -> Result<Self> {
        Self::with_replacer(frame_count, page_size, policy.replacer())
    }

    /// Creates an engine with a caller-supplied replacer.
    pub fn with_replacer(
        frame_count: usize,
        page_size: usize,
        replacer: Box<dyn Replacer>,
    ) -> Result<Self> {
        if frame_count == 0 {
            return Err(Error::InvalidSize {
                what: "frame_count",
            });
        }
        if page_size == 0 {
            return Err(Error::InvalidSize { what: "page_size" });
        }
        Ok(PagingEngine {
            frames: FrameStore::new(frame_count),
            jobs: JobRegistry::new(),
            replacer,
            page_size,
            stats: PagingStats::default(),
        })
    }

    /// Registers a job of `size_bytes` bytes and returns it. Its page
    /// count is derived from the engine's page size; no pages are
    /// loaded until they are resolved.
    pub fn register_job(&mut self, id: JobId, size_bytes: usize) -> Result<&Job> {
        let job = Job::new(id, size_bytes, self.page_size)?;
        debug!(
            "registered {}: {} bytes, {} pages, {} bytes internal fragmentation",
            id,
            size_bytes,
            job.num_pages(),
            job.internal_fragmentation()
        );
        self.jobs.register(job)?;
        self.jobs.get(id)
    }

    /// Resolves a logical byte address for `job` to a physical address,
    /// loading the page on a fault and evicting if memory is full.
    pub fn resolve(&mut self, job: JobId, addr: LogicalAddr) -> Result<PhysAddr> {
        self.resolve_page(job, addr.page(self.page_size), addr.offset(self.page_size))
    }

    /// Resolves a pre-split (page, offset) request for `job`.
    ///
    /// Validation failures leave all state untouched. A hit only
    /// refreshes the replacement tracker; a fault loads the page into
    /// the lowest-indexed free frame, or into the policy's victim frame
    /// after evicting its current page.
    pub fn resolve_page(&mut self, job: JobId, page: usize, offset: usize) -> Result<PhysAddr> {
        if offset >= self.page_size {
            return Err(Error::OffsetOutOfRange {
                offset,
                page_size: self.page_size,
            });
        }
        let resident = {
            let j = self.jobs.get(job)?;
            if page >= j.num_pages() {
                return Err(Error::PageOutOfRange {
                    page,
                    num_pages: j.num_pages(),
                });
            }
            j.table().lookup(page)?
        };
        match resident {
            Some(frame) => {
                self.replacer.record_access(frame);
                self.stats.hits += 1;
                trace!("hit: {} page {} resident in frame {}", job, page, frame);
                Ok(self.physical(frame, offset))
            }
            None => self.handle_fault(job, page, offset),
        }
    }

    /// Loads `page` of `job` into a frame and returns the resolved
    /// address. The request has already been validated.
    fn handle_fault(&mut self, job: JobId, page: usize, offset: usize) -> Result<PhysAddr> {
        self.stats.faults += 1;
        let frame = match self.frames.find_free() {
            Some(free) => free,
            None => self.evict_victim()?,
        };
        self.frames.occupy(frame, PageRef::new(job, page))?;
        self.jobs.get_mut(job)?.table_mut().bind(page, frame)?;
        self.replacer.record_load(frame);
        debug!("page fault: {} page {} loaded into frame {}", job, page, frame);
        Ok(self.physical(frame, offset))
    }

    /// Evicts the replacement policy's victim and returns the freed
    /// frame. Updates the victim owner's page table, not the
    /// requester's.
    fn evict_victim(&mut self) -> Result<usize> {
        let victim = self.replacer.select_victim()?;
        let out = self.frames.vacate(victim)?;
        self.jobs.get_mut(out.job)?.table_mut().unbind(out.page)?;
        self.replacer.record_eviction(victim)?;
        self.stats.evictions += 1;
        debug!("evicted {} page {} from frame {}", out.job, out.page, victim);
        Ok(victim)
    }

    fn physical(&self, frame: usize, offset: usize) -> PhysAddr {
        PhysAddr::new(frame * self.page_size + offset)
    }

    /// Read-only view of every frame, in index order.
    pub fn frame_snapshot(&self) -> Vec<FrameSnapshot> {
        self.frames
            .iter()
            .map(|f| FrameSnapshot {
                frame: f.index,
                occupant: f.occupant,
            })
            .collect()
    }

    /// Read-only view of `job`'s page table, in page order.
    pub fn page_table_snapshot(&self, job: JobId) -> Result<Vec<PageMapping>> {
        Ok(self
            .jobs
            .get(job)?
            .table()
            .iter()
            .map(|(page, frame)| PageMapping { page, frame })
            .collect())
    }

    /// Looks up a registered job.
    pub fn job(&self, id: JobId) -> Result<&Job> {
        self.jobs.get(id)
    }

    /// The configured page (and frame) size in bytes.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The configured number of physical frames.
    pub fn frame_count(&self) -> usize {
        self.frames.frame_count()
    }

    /// The replacement policy in effect.
    pub fn policy(&self) -> Policy {
        self.replacer.policy()
    }

    /// Frames currently known to the replacement tracker, next victim
    /// first.
    pub fn tracked_frames(&self) -> Vec<usize> {
        self.replacer.tracked()
    }

    /// Counters for the run so far.
    pub fn stats(&self) -> PagingStats {
        self.stats
    }
}
