pub mod dns;

pub use dns::HandleDnsQueryUseCase;
