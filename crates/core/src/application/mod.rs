// Application Layer - Use Cases and Business Logic

pub mod roster;

// Re-exports
pub use roster::{
    BirthdayEntry, GroupLine, Grouping, MinimumWageEntry, OldestEmployee, RosterService,
};
