//! The classic roster exercise: one numbered step per roster operation

use crate::render::{self, OutputFormat};
use crate::settings::Settings;
use anyhow::Result;
use colored::Colorize;
use roster_core::application::RosterService;
use std::io::Write;
use tracing::{info, warn};

pub const SEPARATOR: &str = "-------------------------";

/// Run every step in order, stopping at the first failure.
///
/// The closing separator and "Process finished" line are written whether
/// or not a step failed; the failure is returned to the caller to report.
pub fn run(
    service: &mut RosterService,
    settings: &Settings,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let result = run_steps(service, settings, format, out);

    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "Process finished")?;

    result
}

fn run_steps(
    service: &mut RosterService,
    settings: &Settings,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    banner(out, 1, "Loading employees...")?;
    let count = service.load()?;
    done(out, &format!("{} employees loaded", count))?;

    banner(
        out,
        2,
        &format!("Removing employee {}...", settings.remove_name),
    )?;
    service.remove(&settings.remove_name)?;
    done(out, &format!("{} removed", settings.remove_name))?;

    banner(out, 3, "Listing all employees:")?;
    writeln!(out, "{}", render::employees(format, service.list_all()?)?)?;
    done(out, "Listing finished")?;

    banner(
        out,
        4,
        &format!("Applying a {}% raise to salaries...", settings.raise_percent),
    )?;
    service.apply_raise(settings.raise_percent)?;
    done(out, "Raise applied")?;

    banner(out, 5, "Grouping employees by role...")?;
    let groups = service.group_by_role()?.lines().len();
    done(out, &format!("{} roles grouped", groups))?;

    banner(out, 6, "Listing employees grouped by role:")?;
    if !service.grouping_is_current() {
        warn!("Grouping is stale; roster changed since it was built");
    }
    let lines = service.list_grouped()?.lines();
    writeln!(out, "{}", render::grouped(format, &lines)?)?;
    done(out, "Grouped listing finished")?;

    let months = settings
        .birthday_months
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    banner(
        out,
        7,
        &format!("Employees with birthdays in months {}:", months),
    )?;
    let birthdays = service.list_birthdays_in_months(&settings.birthday_months)?;
    writeln!(out, "{}", render::birthdays(format, &birthdays)?)?;
    done(out, "Birthday listing finished")?;

    banner(out, 8, "Oldest employee:")?;
    let oldest = service.oldest_employee()?;
    writeln!(out, "{}", render::oldest(format, &oldest)?)?;
    done(out, "Oldest employee shown")?;

    banner(out, 9, "Listing employees in alphabetical order:")?;
    let sorted = service.list_alphabetical()?;
    writeln!(out, "{}", render::employees(format, &sorted)?)?;
    done(out, "Sorted listing finished")?;

    banner(out, 10, "Total of employee salaries:")?;
    let total = service.total_salary()?;
    writeln!(out, "{}", render::total(format, total)?)?;
    done(out, "Total computed")?;

    banner(out, 11, "Salaries in minimum wages:")?;
    let entries = service.salary_in_minimum_wages(settings.minimum_wage)?;
    writeln!(out, "{}", render::minimum_wages(format, &entries)?)?;
    writeln!(out, "{}", "✓ Conversion finished".green().bold())?;

    Ok(())
}

fn banner(out: &mut impl Write, step: usize, title: &str) -> Result<()> {
    info!(step, "{}", title);
    writeln!(out, "{}", format!("{}) {}", step, title).cyan().bold())?;
    Ok(())
}

fn done(out: &mut impl Write, message: &str) -> Result<()> {
    writeln!(out, "{}", format!("✓ {}", message).green().bold())?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(())
}
