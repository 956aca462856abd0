//! Roster CLI - Command-line interface for the employee roster

mod exercise;
mod format;
mod render;
mod settings;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use render::OutputFormat;
use roster_core::application::RosterService;
use roster_core::domain::{Employee, Role};
use roster_core::port::{FixedTimeProvider, SeedSource, SystemTimeProvider, TimeProvider};
use roster_infra_seed::{JsonFileSeedSource, StaticSeedSource};
use rust_decimal::Decimal;
use settings::Settings;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Employee roster CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (TOML)
    #[arg(long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Compute ages as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the whole exercise sequence (default)
    Run,

    /// List employees
    List {
        /// Only employees holding this role (name or label)
        #[arg(short, long)]
        role: Option<String>,

        /// Sort by name
        #[arg(short, long)]
        alphabetical: bool,
    },

    /// Show employees grouped by role
    Grouped,

    /// Employees with birthdays in the given months
    Birthdays {
        /// Months, comma separated (default: from settings)
        #[arg(short, long, value_delimiter = ',')]
        months: Option<Vec<u32>>,
    },

    /// Show the oldest employee
    Oldest,

    /// Show the total of all salaries
    Total,

    /// Show each salary as a multiple of the minimum wage
    MinimumWages {
        /// Minimum wage (default: from settings)
        #[arg(long)]
        minimum_wage: Option<Decimal>,
    },

    /// List the known roles
    Roles,
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("{} {:#}", "ERROR:".red().bold(), e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "ERROR:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; reports own stdout
fn init_logging() -> Result<()> {
    let log_format =
        std::env::var("ROSTER_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            // Structured JSON lines
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        _ => {
            // Human-readable formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    info!("Roster v{} starting...", VERSION);

    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    debug!(?settings, "Settings loaded");

    let mut service = build_service(&settings, cli.today);
    let format = cli.output;

    let report = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let stdout = std::io::stdout();
            return exercise::run(&mut service, &settings, format, &mut stdout.lock());
        }
        Commands::Roles => render::roles(format)?,
        Commands::List { role, alphabetical } => {
            load(&mut service)?;
            let employees = list_employees(&service, role.as_deref(), alphabetical)?;
            render::employees(format, &employees)?
        }
        Commands::Grouped => {
            load(&mut service)?;
            let lines = service.group_by_role()?.lines();
            render::grouped(format, &lines)?
        }
        Commands::Birthdays { months } => {
            load(&mut service)?;
            let months = months.unwrap_or_else(|| settings.birthday_months.clone());
            render::birthdays(format, &service.list_birthdays_in_months(&months)?)?
        }
        Commands::Oldest => {
            load(&mut service)?;
            render::oldest(format, &service.oldest_employee()?)?
        }
        Commands::Total => {
            load(&mut service)?;
            render::total(format, service.total_salary()?)?
        }
        Commands::MinimumWages { minimum_wage } => {
            load(&mut service)?;
            let minimum_wage = minimum_wage.unwrap_or(settings.minimum_wage);
            render::minimum_wages(format, &service.salary_in_minimum_wages(minimum_wage)?)?
        }
    };

    println!("{}", report);
    Ok(())
}

/// Whole roster or one role, in insertion or name order
fn list_employees(
    service: &RosterService,
    role: Option<&str>,
    alphabetical: bool,
) -> Result<Vec<Employee>> {
    let employees = match role {
        Some(role) => {
            let mut members = service.list_by_role(role.parse::<Role>()?)?;
            if alphabetical {
                members.sort_by(|a, b| a.name().cmp(b.name()));
            }
            members
        }
        None if alphabetical => service.list_alphabetical()?,
        None => service.list_all()?.to_vec(),
    };
    Ok(employees)
}

fn load(service: &mut RosterService) -> Result<()> {
    let loaded = service.load()?;
    debug!(employees = loaded, "Roster loaded");
    Ok(())
}

/// Wire ports to adapters (the --today flag wins over the settings file)
fn build_service(settings: &Settings, today: Option<NaiveDate>) -> RosterService {
    let seed_source: Arc<dyn SeedSource> = match &settings.seed_file {
        Some(path) => {
            let source = JsonFileSeedSource::new(path.clone());
            info!(path = %source.path().display(), "Using seed file");
            Arc::new(source)
        }
        None => Arc::new(StaticSeedSource::new()),
    };

    let time_provider: Arc<dyn TimeProvider> = match today.or(settings.today) {
        Some(date) => Arc::new(FixedTimeProvider(date)),
        None => Arc::new(SystemTimeProvider),
    };

    RosterService::new(seed_source, time_provider)
}
