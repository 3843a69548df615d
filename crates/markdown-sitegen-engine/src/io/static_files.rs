use std::fs;
use std::path::Path;

use super::IoError;

/// Mirrors the `from` directory tree into `to`.
///
/// `to` is deleted first when it exists, so files that vanished from
/// `from` don't linger. Empty directories are reproduced.
pub fn copy_static(from: &Path, to: &Path) -> Result<(), IoError> {
    if !from.is_dir() {
        return Err(IoError::InvalidSourceDir(from.to_path_buf()));
    }

    if to.exists() {
        log::info!("Deleting destination directory {}", to.display());
        fs::remove_dir_all(to)?;
    }
    log::info!("Creating directory {}", to.display());
    fs::create_dir_all(to)?;

    copy_dir_recursive(from, to)
}

fn copy_dir_recursive(from: &Path, to: &Path) -> Result<(), IoError> {
    let mut entries = fs::read_dir(from)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let source = entry.path();
        let dest = to.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            log::info!("Creating dir {}", dest.display());
            fs::create_dir(&dest)?;
            copy_dir_recursive(&source, &dest)?;
        } else {
            log::info!("Copying {} to {}", source.display(), dest.display());
            fs::copy(&source, &dest)?;
        }
    }

    Ok(())
}
