use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Fail when `output` names the same file as `input`.
///
/// Only existing paths can alias each other, so a diagram path that is not
/// on disk yet always passes; both paths are resolved through symlinks and
/// `..` before comparing.
pub fn ensure_output_not_input(output: &Path, input: &Path) -> Result<()> {
    if !output.exists() || !input.exists() {
        return Ok(());
    }

    let resolved_output = fs::canonicalize(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let resolved_input = fs::canonicalize(input)
        .with_context(|| format!("failed to resolve input path {}", input.display()))?;

    if resolved_output == resolved_input {
        bail!(
            "refusing to overwrite flow dump: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}
