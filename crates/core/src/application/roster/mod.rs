// Roster Service - Core use cases for the employee roster

pub mod grouping;
pub mod report;


pub use grouping::Grouping;
pub use report::{BirthdayEntry, GroupLine, MinimumWageEntry, OldestEmployee};

use crate::domain::{salary, DomainError, Employee, Role};
use crate::error::{Result, RosterError};
use crate::port::{SeedSource, TimeProvider};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Roster Service
///
/// Owns the employee collection and the role grouping snapshot. Every
/// operation checks its preconditions before touching state, so a failed
/// call leaves the roster exactly as it was.
pub struct RosterService {
    seed_source: Arc<dyn SeedSource>,
    time_provider: Arc<dyn TimeProvider>,
    employees: Vec<Employee>,
    grouping: Option<Grouping>,
    loaded: bool,
    revision: u64,
}

impl RosterService {
    pub fn new(seed_source: Arc<dyn SeedSource>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            seed_source,
            time_provider,
            employees: Vec::new(),
            grouping: None,
            loaded: false,
            revision: 0,
        }
    }

    /// Populate the roster from the seed source.
    ///
    /// Loading is one-shot per instance: it fails with
    /// [`RosterError::AlreadyLoaded`] when the roster is non-empty or was
    /// loaded before, even if every employee has since been removed. Use
    /// [`RosterService::reset`] to seed again.
    ///
    /// Returns the number of employees loaded.
    pub fn load(&mut self) -> Result<usize> {
        if self.loaded || !self.employees.is_empty() {
            return Err(RosterError::AlreadyLoaded);
        }

        let employees = self.seed_source.employees()?;
        let count = employees.len();

        self.employees = employees;
        self.loaded = true;
        self.bump_revision();

        Ok(count)
    }

    /// Clear employees, grouping and the loaded flag
    pub fn reset(&mut self) {
        self.employees.clear();
        self.grouping = None;
        self.loaded = false;
        self.bump_revision();
    }

    /// Remove the first employee whose name matches, ignoring case.
    ///
    /// The grouping snapshot is left as is and becomes stale.
    pub fn remove(&mut self, name: &str) -> Result<Employee> {
        self.ensure_not_empty()?;

        let index = self
            .employees
            .iter()
            .position(|e| e.has_name(name))
            .ok_or_else(|| RosterError::NotFound {
                name: name.to_string(),
            })?;

        let removed = self.employees.remove(index);
        self.bump_revision();
        Ok(removed)
    }

    /// Employees in insertion order
    pub fn list_all(&self) -> Result<&[Employee]> {
        self.ensure_not_empty()?;
        Ok(&self.employees)
    }

    /// Employees holding `role`, in insertion order
    pub fn list_by_role(&self, role: Role) -> Result<Vec<Employee>> {
        self.ensure_not_empty()?;
        Ok(self
            .employees
            .iter()
            .filter(|e| e.role() == role)
            .cloned()
            .collect())
    }

    /// Raise every salary by `percent` (negative lowers it).
    ///
    /// Each salary is rounded half-up to two places on its own. If any
    /// result would be negative or overflow, no salary changes.
    pub fn apply_raise(&mut self, percent: Decimal) -> Result<()> {
        self.ensure_not_empty()?;

        let adjusted = self
            .employees
            .iter()
            .map(|e| {
                salary::apply_percentage(e.salary(), percent).ok_or_else(|| {
                    DomainError::Validation(format!(
                        "raise of {}% overflows the salary of '{}' ({})",
                        percent,
                        e.name(),
                        e.salary()
                    ))
                })
            })
            .collect::<std::result::Result<Vec<Decimal>, DomainError>>()?;

        if let Some((employee, value)) = self
            .employees
            .iter()
            .zip(&adjusted)
            .find(|(_, value)| value.is_sign_negative() && !value.is_zero())
        {
            return Err(DomainError::Validation(format!(
                "raise of {}% would make the salary of '{}' negative ({})",
                percent,
                employee.name(),
                value
            ))
            .into());
        }

        for (employee, value) in self.employees.iter_mut().zip(adjusted) {
            employee.set_salary(value)?;
        }
        self.bump_revision();

        Ok(())
    }

    /// Rebuild the role grouping from the current roster (clear then rebuild)
    pub fn group_by_role(&mut self) -> Result<&Grouping> {
        self.ensure_not_empty()?;
        let grouping = Grouping::build(&self.employees, self.revision);
        Ok(&*self.grouping.insert(grouping))
    }

    /// Most recent grouping snapshot
    pub fn list_grouped(&self) -> Result<&Grouping> {
        self.grouping.as_ref().ok_or(RosterError::NotGrouped)
    }

    /// True when a grouping exists and no mutation happened since it was built
    pub fn grouping_is_current(&self) -> bool {
        self.grouping
            .as_ref()
            .is_some_and(|g| !g.is_stale_for(self.revision))
    }

    /// Employees born in any of `months` (1-12), in insertion order
    pub fn list_birthdays_in_months(&self, months: &[u32]) -> Result<Vec<BirthdayEntry>> {
        self.ensure_not_empty()?;
        Ok(self
            .employees
            .iter()
            .filter(|e| months.contains(&e.birth_month()))
            .map(BirthdayEntry::from)
            .collect())
    }

    /// Employee with the greatest age in whole years as of today.
    ///
    /// Ties go to the earliest birth date, then to insertion order.
    pub fn oldest_employee(&self) -> Result<OldestEmployee> {
        self.ensure_not_empty()?;

        let today = self.time_provider.today();
        let oldest = self
            .employees
            .iter()
            .min_by_key(|e| e.birth_date())
            .ok_or(RosterError::EmptyRoster)?;

        Ok(OldestEmployee {
            name: oldest.name().to_string(),
            birth_date: oldest.birth_date(),
            age: oldest.age_on(today),
        })
    }

    /// Employees sorted by name (code-point order, stable)
    pub fn list_alphabetical(&self) -> Result<Vec<Employee>> {
        self.ensure_not_empty()?;
        let mut sorted = self.employees.clone();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(sorted)
    }

    /// Exact sum of current salaries
    pub fn total_salary(&self) -> Result<Decimal> {
        self.ensure_not_empty()?;
        salary::checked_total(self.employees.iter().map(Employee::salary)).ok_or_else(|| {
            RosterError::Overflow("total of salaries exceeds the decimal range".to_string())
        })
    }

    /// Each salary divided by `minimum_wage`, rounded half-up to two places
    pub fn salary_in_minimum_wages(&self, minimum_wage: Decimal) -> Result<Vec<MinimumWageEntry>> {
        self.ensure_not_empty()?;
        if minimum_wage <= Decimal::ZERO {
            return Err(RosterError::InvalidMinimumWage(minimum_wage));
        }

        self.employees
            .iter()
            .map(|e| {
                let multiple = salary::ratio(e.salary(), minimum_wage).ok_or_else(|| {
                    RosterError::Overflow(format!(
                        "salary of '{}' divided by minimum wage {} exceeds the decimal range",
                        e.name(),
                        minimum_wage
                    ))
                })?;
                Ok(MinimumWageEntry {
                    name: e.name().to_string(),
                    salary: e.salary(),
                    multiple,
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Current roster revision (bumped on every mutation)
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn ensure_not_empty(&self) -> Result<()> {
        if self.employees.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        Ok(())
    }

    fn bump_revision(&mut self) {
        self.revision += 1;
    }
}
