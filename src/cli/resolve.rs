//! `resolve` command.

use anyhow::{Context, Result};
use std::{fs, io::Write, path::Path};

use crate::log;
use crate::resolve::{OutputFormat, ResolvedSite};

/// Render the document and write it to `output`, or stdout.
pub fn write_document(site: &ResolvedSite, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let rendered = site.document.render(format)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory `{}`", parent.display()))?;
            }
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write `{}`", path.display()))?;
            log!("resolve"; "wrote {} for {}", path.display(), site.target);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write document to stdout")?;
            stdout.flush().ok();
        }
    }
    Ok(())
}
