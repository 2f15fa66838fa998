//! JSON text on disk to and from a `serde_json::Value` tree.

use crate::{ConfigError, ConfigErrorResult};

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use serde_json::{Map, Value};

/// Read and parse a JSON document.
///
/// A missing file is `NotFound`, any other read failure is `Io` and malformed
/// text is `Json`. Nothing partial is ever returned.
pub fn read_document(path: &Path) -> ConfigErrorResult<Value> {
    let contents = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::not_found(path.to_path_buf()),
        _ => ConfigError::io(path.to_path_buf(), e),
    })?;

    serde_json::from_slice(&contents).map_err(|e| ConfigError::json(path.to_path_buf(), e))
}

/// Read a JSON document whose top level must be an object.
pub fn read_object(path: &Path) -> ConfigErrorResult<Map<String, Value>> {
    match read_document(path)? {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::not_an_object(path.to_path_buf())),
    }
}

/// Write `map` as pretty-printed JSON, truncating any existing file.
pub fn write_document(path: &Path, map: &Map<String, Value>) -> ConfigErrorResult<()> {
    let file = File::create(path).map_err(|e| ConfigError::io(path.to_path_buf(), e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, map)
        .map_err(|e| ConfigError::json(path.to_path_buf(), e))?;

    writer
        .flush()
        .map_err(|e| ConfigError::io(path.to_path_buf(), e))
}
