//! Report renderers (text, table, JSON)
//!
//! The core hands back raw values; everything locale- or layout-specific
//! happens here.

use crate::format::{format_date, format_pt_br};
use anyhow::Result;
use clap::ValueEnum;
use roster_core::application::{BirthdayEntry, GroupLine, MinimumWageEntry, OldestEmployee};
use roster_core::domain::{Employee, Role};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tabled::{Table, Tabled};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per record
    #[default]
    Text,
    /// Aligned table
    Table,
    /// Raw structured values
    Json,
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Birth date")]
    birth_date: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Role")]
    role: &'static str,
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Role")]
    role: &'static str,
    #[tabled(rename = "Employees")]
    names: String,
}

#[derive(Tabled)]
struct BirthdayRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Birth date")]
    birth_date: String,
}

#[derive(Tabled)]
struct MinimumWageRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Minimum wages")]
    multiple: String,
}

#[derive(Tabled)]
struct RoleRow {
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn employees(format: OutputFormat, employees: &[Employee]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(employees
            .iter()
            .map(|e| {
                format!(
                    "Name: {}, birth date: {}, salary: {}, role: {}",
                    e.name(),
                    format_date(e.birth_date()),
                    format_pt_br(e.salary()),
                    e.role().label()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(Table::new(employees.iter().map(|e| EmployeeRow {
            name: e.name().to_string(),
            birth_date: format_date(e.birth_date()),
            salary: format_pt_br(e.salary()),
            role: e.role().label(),
        }))
        .to_string()),
        OutputFormat::Json => to_json(employees),
    }
}

pub fn grouped(format: OutputFormat, lines: &[GroupLine]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(lines
            .iter()
            .map(|line| format!("{} = {}", line.role.label(), line.names.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(Table::new(lines.iter().map(|line| GroupRow {
            role: line.role.label(),
            names: line.names.join(", "),
        }))
        .to_string()),
        OutputFormat::Json => to_json(lines),
    }
}

pub fn birthdays(format: OutputFormat, entries: &[BirthdayEntry]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|entry| format!("{} - {}", entry.name, format_date(entry.birth_date)))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(Table::new(entries.iter().map(|entry| BirthdayRow {
            name: entry.name.clone(),
            birth_date: format_date(entry.birth_date),
        }))
        .to_string()),
        OutputFormat::Json => to_json(entries),
    }
}

pub fn oldest(format: OutputFormat, oldest: &OldestEmployee) -> Result<String> {
    match format {
        OutputFormat::Text | OutputFormat::Table => {
            Ok(format!("Name: {}, Age: {}", oldest.name, oldest.age))
        }
        OutputFormat::Json => to_json(oldest),
    }
}

pub fn total(format: OutputFormat, total: Decimal) -> Result<String> {
    match format {
        OutputFormat::Text | OutputFormat::Table => {
            Ok(format!("Total salaries: {}", format_pt_br(total)))
        }
        OutputFormat::Json => to_json(&json!({ "total": total })),
    }
}

pub fn minimum_wages(format: OutputFormat, entries: &[MinimumWageEntry]) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(|entry| {
                format!(
                    "{} earns {} minimum wages",
                    entry.name,
                    format_pt_br(entry.multiple)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(Table::new(entries.iter().map(|entry| MinimumWageRow {
            name: entry.name.clone(),
            salary: format_pt_br(entry.salary),
            multiple: format_pt_br(entry.multiple),
        }))
        .to_string()),
        OutputFormat::Json => to_json(entries),
    }
}

pub fn roles(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(Role::ALL
            .iter()
            .map(|role| format!("{} - {}", role.name(), role.label()))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(Table::new(Role::ALL.iter().map(|role| RoleRow {
            name: role.name(),
            label: role.label(),
        }))
        .to_string()),
        OutputFormat::Json => to_json(
            &Role::ALL
                .iter()
                .map(|role| json!({ "name": role.name(), "label": role.label() }))
                .collect::<Vec<_>>(),
        ),
    }
}
