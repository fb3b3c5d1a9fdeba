//! Jar discovery.

use jarbom_core::Result;
use std::path::{Path, PathBuf};

/// Whether a file name has a `.jar` extension, ignoring case.
pub fn is_jar(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".jar")
}

/// Lists the jar files directly inside `dir`, sorted by path.
pub async fn find_jars(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut jars = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        if is_jar(&entry.file_name().to_string_lossy()) {
            jars.push(entry.path());
        }
    }

    jars.sort();
    tracing::debug!("found {} jars in {}", jars.len(), dir.display());
    Ok(jars)
}
