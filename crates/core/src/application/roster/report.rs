// Report records returned by roster queries (raw values, no formatting)

use crate::domain::{Employee, Role};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One line of a grouped listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupLine {
    pub role: Role,
    pub names: Vec<String>,
}

/// Employee whose birthday falls in a requested month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayEntry {
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<&Employee> for BirthdayEntry {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name().to_string(),
            birth_date: employee.birth_date(),
        }
    }
}

/// Oldest employee and their age in whole years
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OldestEmployee {
    pub name: String,
    pub birth_date: NaiveDate,
    pub age: u32,
}

/// Salary expressed as a multiple of the minimum wage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimumWageEntry {
    pub name: String,
    pub salary: Decimal,
    pub multiple: Decimal,
}
