pub mod server;

pub use server::UdpDnsServer;
