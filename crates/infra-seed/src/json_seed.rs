// JSON seed file adapter

use roster_core::domain::Employee;
use roster_core::error::{Result, RosterError};
use roster_core::port::SeedSource;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads employees from a JSON array on disk.
///
/// Each element is `{"name", "birth_date": "YYYY-MM-DD", "salary", "role"}`,
/// where `salary` is a decimal string or number and `role` is a role name
/// or label. The file is read on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSeedSource {
    path: PathBuf,
}

impl JsonFileSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeedSource for JsonFileSeedSource {
    fn employees(&self) -> Result<Vec<Employee>> {
        debug!(path = %self.path.display(), "Reading seed file");

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            RosterError::Seed(format!(
                "failed to read seed file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let employees: Vec<Employee> = serde_json::from_str(&contents).map_err(|e| {
            RosterError::Seed(format!(
                "invalid seed file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        info!(
            path = %self.path.display(),
            count = employees.len(),
            "Seed file loaded"
        );

        Ok(employees)
    }
}
