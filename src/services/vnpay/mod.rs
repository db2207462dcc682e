pub mod provider;

pub use provider::VnpayProvider;
