/// Exact, case-sensitive domain membership test.
///
/// Built once at startup and read-only afterwards, so implementations are
/// shared across the request path without locking.
pub trait BlocklistIndex: Send + Sync {
    fn contains(&self, domain: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stands in when no blocklist could be loaded: nothing is blocked.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyBlocklist;

impl BlocklistIndex for EmptyBlocklist {
    fn contains(&self, _domain: &str) -> bool {
        false
    }

    fn len(&self) -> usize {
        0
    }
}
