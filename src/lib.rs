pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::{ConsoleReporter, TokenReader};
pub use config::{toml_config::TomlConfig, Settings};
pub use core::{default_checks, engine::CheckEngine, number::NumberCheck, word::WordCheck};
pub use domain::model::{CheckReport, NegativeMode, OutputFormat, SubjectKind};
pub use utils::error::{PalindromeError, Result};
