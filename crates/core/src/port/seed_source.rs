// Seed Source Port (Interface)

use crate::domain::Employee;
use crate::error::Result;

/// Provides the initial employee records for a roster
#[cfg_attr(test, mockall::automock)]
pub trait SeedSource: Send + Sync {
    /// All seed employees, in the order they should be listed
    fn employees(&self) -> Result<Vec<Employee>>;
}
