//! Reading single entries out of zip archives.

use crate::{ConfigError, ConfigErrorResult};

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use zip::ZipArchive;

/// Read the whole contents of `entry_name` from the archive at `archive_path`.
///
/// A missing archive is `NotFound`. A corrupt archive or a missing entry is
/// `Archive`.
pub fn read_entry(archive_path: &Path, entry_name: &str) -> ConfigErrorResult<Vec<u8>> {
    let file = File::open(archive_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::not_found(archive_path.to_path_buf()),
        _ => ConfigError::io(archive_path.to_path_buf(), e),
    })?;

    let mut archive =
        ZipArchive::new(file).map_err(|e| ConfigError::archive(archive_path.to_path_buf(), e))?;

    let mut entry = archive
        .by_name(entry_name)
        .map_err(|e| ConfigError::archive(archive_path.to_path_buf(), e))?;

    let mut contents = Vec::new();
    entry
        .read_to_end(&mut contents)
        .map_err(|e| ConfigError::io(archive_path.to_path_buf(), e))?;

    Ok(contents)
}
