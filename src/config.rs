//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cakematrix/cakematrix.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `CAKEMATRIX_*` prefix, `__` for nesting

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{BranchingMode, CommissionSchedule, DomainResult};

/// Commission constants for the income calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CommissionConfig {
    /// Price of one package
    pub package_price: f64,
    /// Share of the package price paid into the commission fund
    pub fund_percentage: f64,
    /// Share of the fund paid per person, levels 1 to 5
    pub rates: Vec<f64>,
}

impl Default for CommissionConfig {
    fn default() -> Self {
        let schedule = CommissionSchedule::default();
        Self {
            package_price: schedule.package_price(),
            fund_percentage: schedule.fund_percentage(),
            rates: schedule.rates().to_vec(),
        }
    }
}

impl CommissionConfig {
    /// Validate into a schedule the calculator can use.
    pub fn schedule(&self) -> DomainResult<CommissionSchedule> {
        CommissionSchedule::new(self.package_price, self.fund_percentage, &self.rates)
    }
}

/// Raw commission config (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawCommissionConfig {
    pub package_price: Option<f64>,
    pub fund_percentage: Option<f64>,
    pub rates: Option<Vec<f64>>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub currency: Option<String>,
    pub default_mode: Option<BranchingMode>,
    pub snapshot: Option<PathBuf>,
    pub commission: RawCommissionConfig,
}

/// Unified configuration for cakematrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Currency symbol printed after amounts (default: ₽)
    pub currency: String,
    /// Calculator mode when none is given (default: x3)
    pub default_mode: BranchingMode,
    /// Snapshot file; demo data when unset
    pub snapshot: Option<PathBuf>,
    /// Calculator constants
    pub commission: CommissionConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "₽".to_string(),
            default_mode: BranchingMode::default(),
            snapshot: None,
            commission: CommissionConfig::default(),
        }
    }
}

/// Get the XDG config directory for cakematrix.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cakematrix").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cakematrix.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand `~`, `$VAR` and `${VAR}` in the snapshot path.
    fn expand_paths(&mut self) {
        if let Some(path) = self.snapshot.take() {
            let raw = path.to_string_lossy().into_owned();
            let expanded = shellexpand::full(&raw)
                .map(|s| s.into_owned())
                .unwrap_or(raw);
            self.snapshot = Some(PathBuf::from(expanded));
        }
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            currency: overlay
                .currency
                .clone()
                .unwrap_or_else(|| self.currency.clone()),
            default_mode: overlay.default_mode.unwrap_or(self.default_mode),
            snapshot: overlay.snapshot.clone().or_else(|| self.snapshot.clone()),
            commission: CommissionConfig {
                package_price: overlay
                    .commission
                    .package_price
                    .unwrap_or(self.commission.package_price),
                fund_percentage: overlay
                    .commission
                    .fund_percentage
                    .unwrap_or(self.commission.fund_percentage),
                rates: overlay
                    .commission
                    .rates
                    .clone()
                    .unwrap_or_else(|| self.commission.rates.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_config` - Optional config file given on the command line; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/cakematrix/cakematrix.toml`
    /// 3. Local config file
    /// 4. Environment variables: `CAKEMATRIX_*` prefix
    pub fn load(local_config: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(local_path) = local_config {
            if !local_path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            let raw = load_raw_settings(local_path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply CAKEMATRIX_* environment variables as explicit overrides.
    ///
    /// `CAKEMATRIX_COMMISSION__RATES` takes a comma-separated list.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("CAKEMATRIX")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("currency") {
            settings.currency = val;
        }
        if let Ok(val) = config.get_string("default_mode") {
            settings.default_mode = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("snapshot") {
            settings.snapshot = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("commission.package_price") {
            settings.commission.package_price = parse_number("commission.package_price", &val)?;
        }
        if let Ok(val) = config.get_string("commission.fund_percentage") {
            settings.commission.fund_percentage =
                parse_number("commission.fund_percentage", &val)?;
        }
        if let Ok(val) = config.get_string("commission.rates") {
            settings.commission.rates = val
                .split(',')
                .map(|item| parse_number("commission.rates", item))
                .collect::<Result<_, _>>()?;
        }
        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# cakematrix configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/cakematrix/cakematrix.toml
#   Local:  file given with --config
#   Env:    CAKEMATRIX_* environment variables (CAKEMATRIX_COMMISSION__RATES=0.25,0.125,...)

# Currency symbol printed after amounts
# currency = "₽"

# Calculator mode when --mode is not given: "x3" or "x10"
# default_mode = "x3"

# Snapshot file with user, levels, baker offer and referrals (demo data when unset)
# snapshot = "~/cakematrix/snapshot.toml"

[commission]
# Price of one package
# package_price = 150.0

# Share of the package price paid into the commission fund
# fund_percentage = 0.25

# Share of the fund paid per person on levels 1 to 5
# rates = [0.25, 0.125, 0.0833, 0.0625, 0.05]
"#
        .to_string()
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, ApplicationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ApplicationError::Config {
            message: format!("{key}: not a number: '{value}'"),
        })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
