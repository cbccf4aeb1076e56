//! # modalku-config: Settings and Logging for Modalku Hosts
//!
//! `modalku-core` never touches the filesystem or environment. Hosts use
//! this crate to build a [`CalculatorConfig`] from a TOML file and
//! `MODALKU_*` overrides, and to install a tracing subscriber.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use modalku_config::{init_tracing, load_or_default};
//! use modalku_core::{calculate_results_with, BusinessScenario};
//!
//! init_tracing();
//! let config = load_or_default(None);
//!
//! let scenario = BusinessScenario::new("Warung Bakso");
//! let results = calculate_results_with(&scenario, &config);
//! println!("{}", results.payback_period_months);
//! ```

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use logging::{init_tracing, init_tracing_with};
pub use modalku_core::CalculatorConfig;
pub use settings::{
    default_config_path, load, load_from, load_or_default, load_or_default_from, read_file, save,
    SettingsFile,
};
