use crate::error::UploadError;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

/// A file found by [`scan_assets`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// The file name without its extension.
    pub name: String,
    pub path: PathBuf,
}

/// Lists the regular files in `dir` whose extension is `extension`, sorted by name.
///
/// The extension may be given with or without a leading dot. Subdirectories,
/// broken symlinks and files without a UTF-8 name are ignored.
///
/// # Errors
///
/// Returns [`UploadError::File`] if the directory cannot be read.
pub async fn scan_assets<P: AsRef<Path>>(
    dir: P,
    extension: &str,
) -> Result<Vec<AssetEntry>, UploadError> {
    let dir = dir.as_ref();
    let extension = extension.trim_start_matches('.');
    let mut entries = Vec::new();

    let mut read_dir = fs::read_dir(dir)
        .await
        .map_err(|e| UploadError::file(dir, e))?;

    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| UploadError::file(dir, e))?
    {
        let path = entry.path();
        // Follows symlinks, unlike `DirEntry::file_type`.
        let metadata = match fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Skipping {}: broken link", path.display());
                continue;
            }
            Err(e) => return Err(UploadError::file(&path, e)),
        };
        if !metadata.is_file() {
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        entries.push(AssetEntry {
            name: name.to_string(),
            path,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
