//! Site configuration initialization.
//!
//! Writes a commented `site.toml` whose values are the built-in defaults.

mod config;

use crate::log;
use anyhow::{Result, bail};
use std::path::Path;

/// Write `config_name` into `dir`, refusing to overwrite an existing file.
pub fn init_config(dir: &Path, config_name: &Path) -> Result<()> {
    let path = dir.join(config_name);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or edit it directly.",
            path.display()
        );
    }

    config::write_config(&path)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
