use std::fs;
use std::path::Path;

use lsl_core::expand_placeholders;

use crate::LslApiError;

/// Writes `text` to `path` with placeholders expanded, creating parent
/// directories as needed.
pub fn persist_script(path: &Path, text: &str) -> Result<(), LslApiError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|source| LslApiError::WriteFile {
        path: parent.to_path_buf(),
        source,
    })?;

    fs::write(path, expand_placeholders(text)).map_err(|source| LslApiError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote script {}", path.display());
    Ok(())
}
