//! Jobs and the job registry

use hashbrown::HashMap;
use pagesim_api::{Error, JobId, Result};

use crate::page_table::PageTable;

/// A simulated job: a logical address space broken into pages
///
/// Everything except the page table is fixed at registration time. The
/// page count is `ceil(size_bytes / page_size)`; the slack in the last
/// page is the job's internal fragmentation.
#[derive(Debug, Clone)]
pub struct Job {
    id: JobId,
    size_bytes: usize,
    num_pages: usize,
    internal_fragmentation: usize,
    table: PageTable,
}

impl Job {
    /// Creates a job of `size_bytes` bytes split into pages of
    /// `page_size` bytes, with an empty page table.
    pub fn new(id: JobId, size_bytes: usize, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidSize { what: "page_size" });
        }
        if size_bytes == 0 {
            return Err(Error::InvalidSize { what: "size_bytes" });
        }
        let num_pages = size_bytes.div_ceil(page_size);
        Ok(Job {
            id,
            size_bytes,
            num_pages,
            internal_fragmentation: num_pages * page_size - size_bytes,
            table: PageTable::new(id, num_pages),
        })
    }

    /// Job identifier.
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Job size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Number of pages in the job's address space.
    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// Bytes wasted in the job's last page.
    pub fn internal_fragmentation(&self) -> usize {
        self.internal_fragmentation
    }

    /// The job's page table.
    pub fn table(&self) -> &PageTable {
        &self.table
    }

    /// The job's page table, mutably.
    pub fn table_mut(&mut self) -> &mut PageTable {
        &mut self.table
    }
}

/// All registered jobs, keyed by id
#[derive(Debug, Clone, Default)]
pub struct JobRegistry {
    jobs: HashMap<JobId, Job>,
}

impl JobRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        JobRegistry {
            jobs: HashMap::new(),
        }
    }

    /// Adds a job. Registering the same id twice is rejected.
    pub fn register(&mut self, job: Job) -> Result<()> {
        let id = job.id();
        if self.jobs.contains_key(&id) {
            return Err(Error::DuplicateJob(id));
        }
        self.jobs.insert(id, job);
        Ok(())
    }

    /// Looks up a job by id.
    pub fn get(&self, id: JobId) -> Result<&Job> {
        self.jobs.get(&id).ok_or(Error::UnknownJob(id))
    }

    /// Looks up a job by id, mutably.
    pub fn get_mut(&mut self, id: JobId) -> Result<&mut Job> {
        self.jobs.get_mut(&id).ok_or(Error::UnknownJob(id))
    }

    /// Number of registered jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no jobs are registered.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Iterates over all registered jobs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let job = Job::new(JobId::new(1), 250, 100).unwrap();
        assert_eq!(job.num_pages(), 3);
        assert_eq!(job.internal_fragmentation(), 50);
    }

    #[test]
    fn exact_multiple_has_no_fragmentation() {
        let job = Job::new(JobId::new(1), 300, 100).unwrap();
        assert_eq!(job.num_pages(), 3);
        assert_eq!(job.internal_fragmentation(), 0);
    }

    #[test]
    fn job_smaller_than_one_page() {
        let job = Job::new(JobId::new(1), 1, 100).unwrap();
        assert_eq!(job.num_pages(), 1);
        assert_eq!(job.internal_fragmentation(), 99);
    }

    #[test]
    fn zero_size_rejected() {
        assert_eq!(
            Job::new(JobId::new(1), 0, 100).unwrap_err(),
            Error::InvalidSize { what: "size_bytes" }
        );
    }

    #[test]
    fn registry_rejects_duplicate_id() {
        let mut registry = JobRegistry::new();
        registry
            .register(Job::new(JobId::new(1), 100, 100).unwrap())
            .unwrap();
        assert_eq!(
            registry
                .register(Job::new(JobId::new(1), 200, 100).unwrap())
                .unwrap_err(),
            Error::DuplicateJob(JobId::new(1))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_lookup_unknown_job() {
        let registry = JobRegistry::new();
        assert_eq!(
            registry.get(JobId::new(9)).unwrap_err(),
            Error::UnknownJob(JobId::new(9))
        );
    }
}
