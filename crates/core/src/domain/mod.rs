// Domain Layer - Pure business logic and entities

pub mod employee;
pub mod error;
pub mod role;
pub mod salary;

// Re-exports
pub use employee::Employee;
pub use error::DomainError;
pub use role::Role;
