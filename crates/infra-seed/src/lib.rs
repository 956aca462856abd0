// Roster Infrastructure - Seed Adapters
// Implements: SeedSource (built-in table, JSON seed file)

mod json_seed;
mod static_seed;

pub use json_seed::JsonFileSeedSource;
pub use static_seed::StaticSeedSource;
