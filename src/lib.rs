pub mod client;
pub mod flows;
pub mod models;
pub mod services;

pub use client::{ApiClient, ApiError};

/// Structured logging with an `info` default, overridable via `RUST_LOG`.
/// Safe to call more than once (tests).
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
