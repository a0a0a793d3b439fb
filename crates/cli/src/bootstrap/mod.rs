mod blocklist;
mod config;
mod logging;

pub use blocklist::build_blocklist;
pub use config::load_config;
pub use logging::init_logging;
