//! # Configuration
//!
//! Specfilter configuration is managed by [`confique`], which layers
//! environment variables, TOML files and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `SPECFILTER_CATALOG`, `SPECFILTER_FORMAT`.
//! 2. **Files**, in the order given to [`SpecfilterConfig::load`]. The CLI
//!    passes `--config`, then `./specfilter.toml`, then the global file in
//!    the OS config directory. Missing files are skipped.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `catalog` | none | Catalog file used when `--catalog` is not given |
//! | `format` | `text` | Output format (`text` or `json`) |
//!
//! A relative `catalog` in a file is relative to that file's directory. From
//! `SPECFILTER_CATALOG` it is relative to the working directory.

use std::path::{Path, PathBuf};

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CONFIG_FILE_NAME: &str = "specfilter.toml";

const CATALOG_ENV: &str = "SPECFILTER_CATALOG";

/// Configuration for specfilter, stored in `specfilter.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpecfilterConfig {
    /// Catalog file to filter when none is given on the command line.
    #[config(env = "SPECFILTER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format: "text" or "json".
    #[config(default = "text", env = "SPECFILTER_FORMAT")]
    pub format: String,
}

impl Default for SpecfilterConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            format: "text".to_string(),
        }
    }
}

impl SpecfilterConfig {
    /// Load from the environment and `files`, highest priority first.
    pub fn load<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.as_ref());
        }
        let mut config = builder.load()?;
        config.anchor_catalog(files)?;
        Ok(config)
    }

    /// Rebase a relative `catalog` onto the directory of the file that set it.
    fn anchor_catalog<P: AsRef<Path>>(&mut self, files: &[P]) -> Result<()> {
        let Some(catalog) = self.catalog.clone() else {
            return Ok(());
        };
        if catalog.is_absolute() || std::env::var_os(CATALOG_ENV).is_some() {
            return Ok(());
        }

        for file in files {
            let file = file.as_ref();
            if !file.is_file() {
                continue;
            }
            if Self::builder().file(file).load()?.catalog.is_some() {
                if let Some(dir) = file.parent() {
                    self.catalog = Some(dir.join(&catalog));
                }
                return Ok(());
            }
        }
        Ok(())
    }

    /// The output format, lowercased.
    pub fn format(&self) -> String {
        self.format.trim().to_ascii_lowercase()
    }
}
