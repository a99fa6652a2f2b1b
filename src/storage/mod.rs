pub mod port;
pub mod stores;

use crate::prelude::{AppError, Collection, Outcome, Success};
use clap::ValueEnum;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/customers.bin";

pub trait RecordStore {
    fn load(&self) -> Result<Collection, AppError>;

    fn save(&self, records: &Collection) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;

    fn path(&self) -> &Path;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageMediums {
    Bin,
    Json,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "bin" }
    }
}

pub fn parse_storage_type(medium: StorageMediums, path: impl Into<PathBuf>) -> Box<dyn RecordStore> {
    match medium {
        StorageMediums::Bin => Box::new(stores::BinStorage::new(path)),
        StorageMediums::Json => Box::new(stores::JsonStorage::new(path)),
    }
}

/// Reads the backing file. Every failure degrades to an empty collection,
/// the reason travels in the outcome.
pub fn load(store: &dyn RecordStore) -> (Collection, Outcome) {
    let path = store.path().to_path_buf();
    debug!(path = %path.display(), medium = store.get_medium(), "loading customers");

    match store.load() {
        Ok(records) => {
            let count = records.len();
            info!(path = %path.display(), count, "customers loaded");
            (records, Ok(Success::Loaded { count, path }))
        }
        Err(AppError::NotFound(missing)) => {
            info!(path = %missing.display(), "no saved customers yet");
            (Collection::new(), Err(AppError::NotFound(missing)))
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "starting with an empty customer list");
            (Collection::new(), Err(err))
        }
    }
}

/// Replaces the backing file with `records`. On failure the previous file is left as it was.
pub fn save(store: &dyn RecordStore, records: &Collection) -> Outcome {
    let path = store.path().to_path_buf();
    debug!(path = %path.display(), medium = store.get_medium(), count = records.len(), "saving customers");

    match store.save(records) {
        Ok(()) => {
            info!(path = %path.display(), count = records.len(), "customers saved");
            Ok(Success::Saved {
                count: records.len(),
                path,
            })
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "save failed");
            Err(err)
        }
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Reads the whole file, reporting a missing file as [`AppError::NotFound`].
pub fn read_existing(path: &Path) -> Result<Vec<u8>, AppError> {
    match fs::read(path) {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::NotFound(path.to_path_buf())),
        Err(e) => Err(AppError::Io(e)),
    }
}

/// Writes `data` next to `path` and renames it into place, so readers only
/// ever see the old file or the complete new one. An existing file keeps
/// its permissions.
pub fn write_atomically(path: &Path, data: &[u8]) -> Result<(), AppError> {
    create_file_parent(path)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;

    if let Ok(existing) = fs::metadata(path)
        && existing.is_file()
    {
        file.as_file().set_permissions(existing.permissions())?;
    }
    file.persist(path)?;

    Ok(())
}
