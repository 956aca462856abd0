// Built-in seed table

use chrono::NaiveDate;
use roster_core::domain::{Employee, Role};
use roster_core::error::{Result, RosterError};
use roster_core::port::SeedSource;
use rust_decimal::Decimal;
use std::str::FromStr;

/// (name, (year, month, day), salary, role)
type SeedRow = (&'static str, (i32, u32, u32), &'static str, Role);

const SEED_ROWS: [SeedRow; 10] = [
    ("Maria", (2000, 10, 18), "2009.44", Role::Operator),
    ("João", (1990, 5, 12), "2284.38", Role::Operator),
    ("Caio", (1961, 5, 2), "9836.14", Role::Coordinator),
    ("Miguel", (1988, 10, 14), "19119.88", Role::Director),
    ("Alice", (1995, 1, 5), "2234.68", Role::Receptionist),
    ("Heitor", (1999, 11, 19), "1582.72", Role::Operator),
    ("Arthur", (1993, 3, 31), "4071.84", Role::Accountant),
    ("Laura", (1994, 7, 8), "3017.45", Role::Manager),
    ("Heloísa", (2003, 5, 24), "1606.85", Role::Electrician),
    ("Helena", (1996, 9, 2), "2799.93", Role::Manager),
];

/// The fixed ten-employee roster
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSeedSource;

impl StaticSeedSource {
    pub fn new() -> Self {
        Self
    }
}

impl SeedSource for StaticSeedSource {
    fn employees(&self) -> Result<Vec<Employee>> {
        SEED_ROWS.iter().map(build_row).collect()
    }
}

fn build_row(&(name, (year, month, day), salary, role): &SeedRow) -> Result<Employee> {
    let birth_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RosterError::Seed(format!(
            "invalid birth date {:04}-{:02}-{:02} for '{}'",
            year, month, day, name
        ))
    })?;
    let salary = Decimal::from_str(salary)
        .map_err(|e| RosterError::Seed(format!("invalid salary for '{}': {}", name, e)))?;

    Ok(Employee::new(name, birth_date, salary, role)?)
}
