mod query_stats;

pub use query_stats::{QueryStats, QueryStatsSnapshot};
