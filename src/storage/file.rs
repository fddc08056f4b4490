//! JSON file storage, persisting theme preferences between sessions

use super::{Storage, StorageError};
use log::{debug, trace, warn};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

/// Key-value storage backed by a single JSON object on disk.
///
/// The file is read on every lookup and fully rewritten on every write, so
/// several processes sharing the file always see the latest value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all items. A missing file holds no items.
    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!("Storage file {} does not exist yet", self.path.display());
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, items)?;
        debug!("Saved {} item(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    /// A file that is not a valid document is replaced by one holding only
    /// the new item.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = match self.load() {
            Ok(items) => items,
            Err(StorageError::Json(e)) => {
                warn!(
                    "Discarding unreadable storage file {}: {e}",
                    self.path.display()
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }
}
