//! Request generations per target region.
//!
//! Fragment fetches are never cancelled. Every request is stamped with a
//! generation from one page-wide counter, and each region remembers the
//! newest generation issued for it or swapped into it. A response is only
//! applied if nothing newer has claimed the region it would replace, which
//! also covers responses the server retargets elsewhere.

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct Generations {
    counter: u64,
    latest: HashMap<String, u64>,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next generation for a request into `target`.
    pub fn issue(&mut self, target: &str) -> u64 {
        self.counter += 1;
        self.latest.insert(target.to_string(), self.counter);
        self.counter
    }

    /// Newest generation issued for or swapped into `region`, 0 if none.
    pub fn latest(&self, region: &str) -> u64 {
        self.latest.get(region).copied().unwrap_or(0)
    }

    /// Whether content from `generation` may still replace `region`.
    pub fn is_current(&self, region: &str, generation: u64) -> bool {
        generation >= self.latest(region)
    }

    /// Record that content from `generation` now fills `region`.
    pub fn applied(&mut self, region: &str, generation: u64) {
        let latest = self.latest.entry(region.to_string()).or_insert(0);
        *latest = (*latest).max(generation);
    }
}
