pub mod mock_blocklist;
pub mod packets;

pub use mock_blocklist::MockBlocklist;
pub use packets::*;
