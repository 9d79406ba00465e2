use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::OPENCV_CASCADE_DIRS;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error(
        "classifier data file not found: {} (searched {})",
        .name.display(),
        format_searched(.searched)
    )]
    NotFound { name: PathBuf, searched: Vec<PathBuf> },
}

fn format_searched(searched: &[PathBuf]) -> String {
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve a classifier data file.
///
/// Resolution order:
/// 1. The path as given (relative paths are relative to the working directory)
/// 2. Each of `extra_dirs`, in order
/// 3. User data directory (platform-specific)
/// 4. OpenCV's install locations for bundled cascades
///
/// Only the file name is used for steps 2-4.
pub fn resolve(path: &Path, extra_dirs: &[PathBuf]) -> Result<PathBuf, ModelResolveError> {
    let mut searched = vec![path.to_path_buf()];
    if path.is_file() {
        return Ok(path.to_path_buf());
    }

    let Some(name) = path.file_name() else {
        return Err(ModelResolveError::NotFound {
            name: path.to_path_buf(),
            searched,
        });
    };

    let candidates = extra_dirs
        .iter()
        .cloned()
        .chain(cascade_data_dir())
        .chain(OPENCV_CASCADE_DIRS.iter().map(PathBuf::from));

    for dir in candidates {
        let candidate = dir.join(name);
        if candidate.is_file() {
            log::debug!("Resolved {} to {}", path.display(), candidate.display());
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    Err(ModelResolveError::NotFound {
        name: path.to_path_buf(),
        searched,
    })
}

/// Platform-specific directory for user-installed cascade files.
///
/// - macOS: `~/Library/Application Support/Facewatch/cascades/`
/// - Linux: `$XDG_DATA_HOME/Facewatch/cascades/` or `~/.local/share/Facewatch/cascades/`
/// - Windows: `%APPDATA%/Facewatch/cascades/`
pub fn cascade_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("Facewatch").join("cascades"))
}
