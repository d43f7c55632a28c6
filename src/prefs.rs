use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key-value persistence seam. The store only ever reads and writes whole
/// string values, so backends stay trivial to implement.
pub trait Storage {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> io::Result<()>;
}

fn get_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\flashcard-study")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/flashcard-study")
    }
}

pub fn default_prefs_path() -> PathBuf {
    get_data_dir().join("prefs.json")
}

/// File-backed preference map: a single JSON object of string keys to
/// string values, rewritten wholesale on every `put`. A missing or
/// unparseable file loads as an empty map.
pub struct Prefs {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl Prefs {
    pub fn open(path: &Path) -> Self {
        let values = fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            values,
        }
    }

    fn write_out(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&self.values)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

impl Storage for Prefs {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write_out()
    }
}

/// In-memory backend for unit tests and for running without a filesystem.
#[derive(Debug, Default)]
pub struct MemPrefs {
    values: HashMap<String, String>,
}

impl MemPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemPrefs {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
