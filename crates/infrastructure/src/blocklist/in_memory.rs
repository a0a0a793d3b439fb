use rustc_hash::FxHashSet;
use sinkhole_dns_application::ports::BlocklistIndex;

/// Exact-match blocklist held entirely in memory.
///
/// Populated before it is shared; the request path only reads it.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBlocklist {
    domains: FxHashSet<String>,
}

impl InMemoryBlocklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut blocklist = Self::new();
        blocklist.extend(domains);
        blocklist
    }

    pub fn extend<I, S>(&mut self, domains: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains.extend(domains.into_iter().map(Into::into));
    }
}

impl BlocklistIndex for InMemoryBlocklist {
    #[inline]
    fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    fn len(&self) -> usize {
        self.domains.len()
    }
}
