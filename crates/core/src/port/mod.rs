// Port Layer - Interfaces for external dependencies

pub mod seed_source;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use seed_source::SeedSource;
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
