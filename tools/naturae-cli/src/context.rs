//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use naturae_commerce::prelude::{Catalog, Glossary, Session, StoreInfo};

use crate::config::StoreConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Store data.
    pub config: StoreConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from a store data file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            StoreConfig::load(path)?
        } else {
            let cwd = std::env::current_dir()?;
            match Self::find_config(&cwd) {
                Some((path, config)) => {
                    output.debug(&format!("Using store data from {}", path.display()));
                    config
                }
                None => bail!(
                    "No store data file found (naturae.toml); pass one with --config"
                ),
            }
        };

        Ok(Self { config, output })
    }

    /// Open a fresh storefront session on the loaded data.
    pub fn session(&self) -> Session {
        Session::new(
            Catalog::new(self.config.products.clone()),
            Glossary::new(self.config.glossary.clone()),
            StoreInfo::new(&self.config.store.name, &self.config.store.email),
        )
    }

    /// Find a store data file in the directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, StoreConfig)> {
        let config_names = ["naturae.toml", ".naturae.toml", "naturae.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = StoreConfig::load(config_path.to_str()?) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}
