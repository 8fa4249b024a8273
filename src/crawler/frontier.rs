//! Crawl frontier: pending queue plus visited set
//!
//! The frontier is the sole owner of crawl progress state. FIFO ordering
//! gives breadth-first traversal from the seed.

use std::collections::{HashSet, VecDeque};

/// FIFO queue of URLs awaiting processing, with the monotonically growing
/// visited set
///
/// Duplicate suppression happens twice: `push` refuses URLs already visited,
/// and `pop` skips entries that became visited after they were queued (a URL
/// can be queued more than once before its first occurrence is processed).
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<String>,
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier seeded with exactly the starting URL
    pub fn seeded(seed: &str) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(seed.to_string());
        Self {
            queue,
            visited: HashSet::new(),
        }
    }

    /// Appends a URL to the tail unless it was already visited
    pub fn push(&mut self, url: &str) {
        if !self.visited.contains(url) {
            self.queue.push_back(url.to_string());
        }
    }

    /// Removes and returns the head, skipping entries already visited
    ///
    /// Skipped entries consume nothing; `None` means the frontier is
    /// exhausted.
    pub fn pop(&mut self) -> Option<String> {
        while let Some(url) = self.queue.pop_front() {
            if !self.visited.contains(&url) {
                return Some(url);
            }
        }
        None
    }

    /// Marks a URL as visited; returns false if it already was
    pub fn mark_visited(&mut self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// The visited set, for scope filtering
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Number of URLs awaiting processing (visited stragglers included)
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of URLs ever marked visited
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
