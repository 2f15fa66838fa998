mod store;

use crate::{LEGACY_LOCATIONS, LegacyLocation, Locations};

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub(crate) const TEST_VERSION: &str = "1.4.4";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create an empty temp home and locations rooted at it
pub(crate) fn setup_home() -> (TempDir, Locations) {
    let temp = TempDir::new().unwrap();
    let locations = Locations::new(temp.path(), TEST_VERSION);
    (temp, locations)
}

pub(crate) fn legacy(label: &str) -> &'static LegacyLocation {
    LEGACY_LOCATIONS
        .iter()
        .find(|location| location.label == label)
        .unwrap()
}

/// Write pretty JSON, creating parent directories
pub(crate) fn write_json(path: &Path, value: &Value) {
    write_text(path, &serde_json::to_string_pretty(value).unwrap());
}

pub(crate) fn write_text(path: &Path, text: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

pub(crate) fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// Write a zip archive holding a single entry
pub(crate) fn write_archive(path: &Path, entry: &str, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let file = fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    zip.start_file(entry, options).unwrap();
    zip.write_all(contents.as_bytes()).unwrap();
    zip.finish().unwrap();
}

/// Java-style XML property file with the id four tokens after its key
pub(crate) fn properties_xml(anonymous_id: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <properties>\n\
         <entry><key>Theme</key>\n<value>dark</value></entry>\n\
         <entry><key>AnonymousID</key>\n<value>{anonymous_id}</value></entry>\n\
         </properties>\n"
    )
}
