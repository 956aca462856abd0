// Employee Domain Model

use super::error::{DomainError, Result};
use super::role::Role;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee value record.
///
/// Name is the de facto lookup key (case-insensitive); there is no
/// identity field, so two employees may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    name: String,
    birth_date: NaiveDate,
    salary: Decimal,
    role: Role,
}

/// Unvalidated wire shape of an [`Employee`]
#[derive(Deserialize)]
struct EmployeeRecord {
    name: String,
    birth_date: NaiveDate,
    salary: Decimal,
    role: Role,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = DomainError;

    fn try_from(record: EmployeeRecord) -> Result<Self> {
        Employee::new(record.name, record.birth_date, record.salary, record.role)
    }
}

impl Employee {
    /// Create a new Employee
    ///
    /// # Arguments
    ///
    /// * `name` - Full name, must not be blank
    /// * `birth_date` - Calendar birth date
    /// * `salary` - Exact decimal amount, must not be negative
    /// * `role` - Job title
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        salary: Decimal,
        role: Role,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "employee name must not be empty".to_string(),
            ));
        }
        validate_salary(&name, salary)?;

        Ok(Self {
            name,
            birth_date,
            salary,
            role,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn salary(&self) -> Decimal {
        self.salary
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Birth month, 1-12
    pub fn birth_month(&self) -> u32 {
        self.birth_date.month()
    }

    /// Whole years lived as of `today` (0 if born after `today`)
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }

    /// Unicode-aware, case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Replace the salary, keeping the non-negative invariant
    pub fn set_salary(&mut self, salary: Decimal) -> Result<()> {
        validate_salary(&self.name, salary)?;
        self.salary = salary;
        Ok(())
    }
}

fn validate_salary(name: &str, salary: Decimal) -> Result<()> {
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(DomainError::Validation(format!(
            "salary of '{}' must not be negative (got {})",
            name, salary
        )));
    }
    Ok(())
}
