//! Frame replacement policies
//!
//! A replacer never inspects the frame pool; victim selection is purely
//! a function of the load/access order it has been told about. That
//! keeps the ordering policy testable in isolation from occupancy
//! bookkeeping. Selection (`select_victim`) and removal
//! (`record_eviction`) are separate steps so the engine can tear down
//! the victim's page-table entry in between.

use std::collections::VecDeque;

use core::fmt;

#[cfg(test)]
use mockall::automock;
use pagesim_api::{Error, Result};

/// Replacement policy selected at memory-initialization time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Evict the earliest-loaded frame, ignoring later accesses
    Fifo,
    /// Evict the frame least recently touched by a load or an access
    Lru,
}

impl Policy {
    /// Builds a fresh, empty replacer implementing this policy.
    pub fn replacer(self) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Lru => write!(f, "LRU"),
        }
    }
}

/// Shared contract of the replacement policies
///
/// A frame is tracked from `record_load` until `record_eviction`;
/// exactly the occupied frames are tracked at any point.
#[cfg_attr(test, automock)]
pub trait Replacer {
    /// Called exactly once when a frame goes from free to occupied.
    fn record_load(&mut self, frame: usize);

    /// Called on every hit against a resident page.
    fn record_access(&mut self, frame: usize);

    /// Called when a frame is forcibly freed; stops tracking it.
    fn record_eviction(&mut self, frame: usize) -> Result<()>;

    /// Picks the frame to evict next. Does not remove it.
    fn select_victim(&self) -> Result<usize>;

    /// Currently tracked frames, in eviction order (next victim first).
    fn tracked(&self) -> Vec<usize>;

    /// The policy this replacer implements.
    fn policy(&self) -> Policy;
}

/// First-in-first-out replacement: a queue of frames in load order
#[derive(Debug, Clone, Default)]
pub struct FifoReplacer {
    queue: VecDeque<usize>,
}

impl FifoReplacer {
    /// Creates an empty FIFO replacer.
    pub fn new() -> Self {
        FifoReplacer {
            queue: VecDeque::new(),
        }
    }
}

impl Replacer for FifoReplacer {
    fn record_load(&mut self, frame: usize) {
        self.queue.push_back(frame);
    }

    fn record_access(&mut self, _frame: usize) {
        // FIFO ignores access recency.
    }

    fn record_eviction(&mut self, frame: usize) -> Result<()> {
        if self.queue.front() != Some(&frame) {
            return Err(Error::InvalidState("FIFO eviction not at queue head"));
        }
        self.queue.pop_front();
        Ok(())
    }

    fn select_victim(&self) -> Result<usize> {
        self.queue.front().copied().ok_or(Error::NoVictimAvailable)
    }

    fn tracked(&self) -> Vec<usize> {
        self.queue.iter().copied().collect()
    }

    fn policy(&self) -> Policy {
        Policy::Fifo
    }
}

/// Least-recently-used replacement
///
/// The queue runs from least- to most-recently used; loads and accesses
/// both move a frame to the MRU end.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    queue: VecDeque<usize>,
}

impl LruReplacer {
    /// Creates an empty LRU replacer.
    pub fn new() -> Self {
        LruReplacer {
            queue: VecDeque::new(),
        }
    }

    fn remove(&mut self, frame: usize) -> bool {
        match self.queue.iter().position(|&f| f == frame) {
            Some(pos) => {
                self.queue.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl Replacer for LruReplacer {
    fn record_load(&mut self, frame: usize) {
        self.queue.push_back(frame);
    }

    fn record_access(&mut self, frame: usize) {
        if self.remove(frame) {
            self.queue.push_back(frame);
        }
    }

    fn record_eviction(&mut self, frame: usize) -> Result<()> {
        if self.remove(frame) {
            Ok(())
        } else {
            Err(Error::InvalidState("LRU eviction of an untracked frame"))
        }
    }

    fn select_victim(&self) -> Result<usize> {
        self.queue.front().copied().ok_or(Error::NoVictimAvailable)
    }

    fn tracked(&self) -> Vec<usize> {
        self.queue.iter().copied().collect()
    }

    fn policy(&self) -> Policy {
        Policy::Lru
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_evicts_in_load_order() {
        let mut fifo = FifoReplacer::new();
        fifo.record_load(0);
        fifo.record_load(1);
        fifo.record_load(2);

        assert_eq!(fifo.select_victim().unwrap(), 0);
        fifo.record_eviction(0).unwrap();
        assert_eq!(fifo.select_victim().unwrap(), 1);
        fifo.record_eviction(1).unwrap();
        assert_eq!(fifo.select_victim().unwrap(), 2);
    }

    #[test]
    fn fifo_ignores_accesses() {
        let mut fifo = FifoReplacer::new();
        fifo.record_load(0);
        fifo.record_load(1);
        fifo.record_access(0);
        fifo.record_access(0);
        assert_eq!(fifo.select_victim().unwrap(), 0);
    }

    #[test]
    fn fifo_eviction_must_be_at_head() {
        let mut fifo = FifoReplacer::new();
        fifo.record_load(0);
        fifo.record_load(1);
        assert!(matches!(
            fifo.record_eviction(1).unwrap_err(),
            Error::InvalidState(_)
        ));
        assert_eq!(fifo.tracked(), vec![0, 1]);
    }

    #[test]
    fn lru_access_refreshes_recency() {
        let mut lru = LruReplacer::new();
        lru.record_load(0);
        lru.record_load(1);
        lru.record_access(0);
        // 1 is now the least recently used.
        assert_eq!(lru.select_victim().unwrap(), 1);
        assert_eq!(lru.tracked(), vec![1, 0]);
    }

    #[test]
    fn lru_without_accesses_degenerates_to_load_order() {
        let mut lru = LruReplacer::new();
        lru.record_load(0);
        lru.record_load(1);
        lru.record_load(2);
        assert_eq!(lru.select_victim().unwrap(), 0);
    }

    #[test]
    fn lru_evicts_from_anywhere() {
        let mut lru = LruReplacer::new();
        lru.record_load(0);
        lru.record_load(1);
        lru.record_load(2);
        lru.record_eviction(1).unwrap();
        assert_eq!(lru.tracked(), vec![0, 2]);
    }

    #[test]
    fn lru_eviction_of_untracked_frame_is_invalid_state() {
        let mut lru = LruReplacer::new();
        assert!(matches!(
            lru.record_eviction(3).unwrap_err(),
            Error::InvalidState(_)
        ));
    }

    #[test]
    fn empty_replacer_has_no_victim() {
        assert_eq!(
            FifoReplacer::new().select_victim().unwrap_err(),
            Error::NoVictimAvailable
        );
        assert_eq!(
            LruReplacer::new().select_victim().unwrap_err(),
            Error::NoVictimAvailable
        );
    }

    #[test]
    fn policy_builds_matching_replacer() {
        assert_eq!(Policy::Fifo.replacer().policy(), Policy::Fifo);
        assert_eq!(Policy::Lru.replacer().policy(), Policy::Lru);
        assert_eq!(Policy::Fifo.to_string(), "FIFO");
        assert_eq!(Policy::Lru.to_string(), "LRU");
    }
}
