//! Whole-file replacement through a uniquely named sibling temp file

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::Result;

/// Replace `path` with `contents`, creating parent directories as needed
///
/// Every call writes its own temp file, so concurrent writers to one path
/// never rename each other's data; the last rename wins.
pub(crate) async fn write_atomic(path: &Path, contents: String) -> Result<()> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || write_blocking(&path, contents.as_bytes())).await?
}

fn write_blocking(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;

    let mut file = NamedTempFile::new_in(&dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;

    // A failed persist hands the temp file back; dropping it removes it
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
