pub mod hook;
pub mod paths;

pub use crate::utils::error::Result;
pub use hook::HookEngine;
pub use paths::PathResolver;
