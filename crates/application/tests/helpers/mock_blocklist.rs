#![allow(dead_code)]

use sinkhole_dns_application::ports::BlocklistIndex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockBlocklist {
    domains: HashSet<String>,
    lookups: AtomicUsize,
}

impl MockBlocklist {
    pub fn new() -> Self {
        Self {
            domains: HashSet::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_blocked_domains(domains: Vec<&str>) -> Self {
        Self {
            domains: domains.into_iter().map(str::to_string).collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl Default for MockBlocklist {
    fn default() -> Self {
        Self::new()
    }
}

impl BlocklistIndex for MockBlocklist {
    fn contains(&self, domain: &str) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.domains.contains(domain)
    }

    fn len(&self) -> usize {
        self.domains.len()
    }
}
