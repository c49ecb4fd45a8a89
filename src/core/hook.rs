use crate::config::HookConfig;
use crate::core::PathResolver;
use crate::utils::error::{HookError, Result};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

const SCHEMA_SUBDIR: &str = "glib-2.0/schemas";
const APPLICATIONS_SUBDIR: &str = "applications";
const AUTOSTART_SUBDIR: &str = "xdg/autostart";
const DESKTOP_ENTRY: &str = "nm-applet.desktop";

pub struct HookEngine {
    config: HookConfig,
    resolver: PathResolver,
}

impl HookEngine {
    pub fn new(config: HookConfig) -> Self {
        let resolver = PathResolver::new(config.destdir.clone(), config.cwd.clone());
        Self { config, resolver }
    }

    /// Runs both post-install steps and returns the installed entry path.
    ///
    /// Schema compilation only makes sense against the live system, so it is
    /// skipped entirely under a staging root and deferred to the real install.
    pub fn run(&self) -> Result<PathBuf> {
        if self.resolver.is_staged() {
            tracing::debug!("Staging root set, skipping schema compilation");
        } else {
            // A launch failure is fatal; the compiler's own exit status is not.
            let status = self.compile_schemas()?;
            if !status.success() {
                tracing::warn!("Schema compiler exited with {}", status);
            }
        }

        self.install_autostart_entry()
    }

    fn compile_schemas(&self) -> Result<ExitStatus> {
        let schema_dir = self.config.data_prefix.join(SCHEMA_SUBDIR);

        println!("Compile gsettings schemas...");
        tracing::debug!(
            "Running {} {}",
            self.config.schema_compiler,
            schema_dir.display()
        );

        Command::new(&self.config.schema_compiler)
            .arg(&schema_dir)
            .status()
            .map_err(|source| HookError::CompilerLaunchError {
                command: self.config.schema_compiler.clone(),
                source,
            })
    }

    fn install_autostart_entry(&self) -> Result<PathBuf> {
        let dst_dir = self
            .resolver
            .resolve(&self.config.install_prefix.join(AUTOSTART_SUBDIR));
        let src = self.resolver.resolve(
            &self
                .config
                .data_prefix
                .join(APPLICATIONS_SUBDIR)
                .join(DESKTOP_ENTRY),
        );

        // Tolerates the directory already existing, including races with
        // other installer steps.
        fs::create_dir_all(&dst_dir)?;

        if !src.is_file() {
            return Err(HookError::MissingSourceError { path: src });
        }

        let dst = dst_dir.join(DESKTOP_ENTRY);
        tracing::debug!("Copying {} -> {}", src.display(), dst.display());
        fs::copy(&src, &dst)?;

        Ok(dst)
    }
}
