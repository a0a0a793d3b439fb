mod in_memory;
mod loader;
mod parser;

pub use in_memory::InMemoryBlocklist;
pub use loader::load_blocklist;
pub use parser::{parse_list_line, parse_list_text};
