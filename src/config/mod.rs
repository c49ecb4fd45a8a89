use crate::utils::error::{HookError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Staging-root override honored by packaging tools.
pub const DESTDIR_VAR: &str = "DESTDIR";

pub const DEFAULT_SCHEMA_COMPILER: &str = "glib-compile-schemas";

#[derive(Debug, Clone, Parser)]
#[command(name = "nm-post-install")]
#[command(about = "Post-install hook: compile gsettings schemas and install the autostart entry")]
pub struct CliConfig {
    /// Installation data prefix (the "share" directory root)
    pub data_prefix: PathBuf,

    /// Installation prefix the autostart directory is derived from
    pub install_prefix: PathBuf,

    #[arg(long, default_value = DEFAULT_SCHEMA_COMPILER)]
    pub schema_compiler: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_prefix", &self.data_prefix)?;
        validate_path("install_prefix", &self.install_prefix)?;
        validate_non_empty_string("schema_compiler", &self.schema_compiler)?;
        Ok(())
    }
}

/// Fully-resolved configuration the hook runs from. Ambient process state
/// (the staging-root variable and the working directory) is captured exactly
/// once here and never queried again.
#[derive(Debug, Clone)]
pub struct HookConfig {
    pub data_prefix: PathBuf,
    pub install_prefix: PathBuf,
    pub schema_compiler: String,
    pub destdir: Option<PathBuf>,
    pub cwd: PathBuf,
}

impl HookConfig {
    pub fn from_cli(cli: CliConfig) -> Result<Self> {
        // An empty DESTDIR counts as unset, matching packaging convention.
        let destdir = env::var_os(DESTDIR_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let cwd = env::current_dir().map_err(|e| HookError::ConfigError {
            message: format!("Cannot determine working directory: {}", e),
        })?;

        Ok(Self {
            data_prefix: cli.data_prefix,
            install_prefix: cli.install_prefix,
            schema_compiler: cli.schema_compiler,
            destdir,
            cwd,
        })
    }
}
