//! Layered settings: defaults < user config file < --config file < ROSTER_* env

use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "ROSTER";
const CONFIG_FILE_NAME: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Percentage applied by the exercise raise step
    pub raise_percent: Decimal,
    /// Months (1-12) reported as birthday season
    pub birthday_months: Vec<u32>,
    /// Baseline for salary-in-minimum-wages
    pub minimum_wage: Decimal,
    /// Employee removed by the exercise remove step
    pub remove_name: String,
    /// JSON seed file; the built-in table when unset
    pub seed_file: Option<PathBuf>,
    /// Pin "today" for age computations
    pub today: Option<NaiveDate>,
}

impl Settings {
    /// Load settings from every layer
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_sources(
            user_config_path(),
            explicit,
            Some(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("birthday_months"),
            ),
        )
    }

    fn from_sources(
        user_file: Option<PathBuf>,
        explicit: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("raise_percent", "10")?
            .set_default("birthday_months", vec![10_i64, 12])?
            .set_default("minimum_wage", "1212.00")?
            .set_default("remove_name", "João")?;

        if let Some(path) = user_file {
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }
        if let Some(environment) = environment {
            builder = builder.add_source(environment);
        }

        builder.build()?.try_deserialize()
    }
}

/// `<platform config dir>/roster.toml`
fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "roster").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_sources(None, None, None).unwrap();

        assert_eq!(settings.raise_percent, dec!(10));
        assert_eq!(settings.birthday_months, vec![10, 12]);
        assert_eq!(settings.minimum_wage, dec!(1212.00));
        assert_eq!(settings.remove_name, "João");
        assert!(settings.seed_file.is_none());
        assert!(settings.today.is_none());
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "raise_percent = \"5.5\"\nbirthday_months = [1, 2]\nminimum_wage = \"1412.00\"\ntoday = \"2030-01-01\""
        )
        .unwrap();

        let settings = Settings::from_sources(None, Some(file.path()), None).unwrap();

        assert_eq!(settings.raise_percent, dec!(5.5));
        assert_eq!(settings.birthday_months, vec![1, 2]);
        assert_eq!(settings.minimum_wage, dec!(1412.00));
        assert_eq!(settings.remove_name, "João");
        assert_eq!(settings.today, NaiveDate::from_ymd_opt(2030, 1, 1));
    }

    #[test]
    fn test_missing_user_file_is_ignored() {
        let settings =
            Settings::from_sources(Some(PathBuf::from("/nonexistent/roster.toml")), None, None)
                .unwrap();
        assert_eq!(settings.raise_percent, dec!(10));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = Settings::from_sources(None, Some(Path::new("/nonexistent/roster.toml")), None);
        assert!(result.is_err());
    }
}
