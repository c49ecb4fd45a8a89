pub mod config;
pub mod core;
pub mod utils;

pub use config::{CliConfig, HookConfig};
pub use core::{hook::HookEngine, paths::PathResolver};
pub use utils::error::{HookError, Result};
