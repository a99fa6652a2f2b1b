use super::*;

use crate::helper;

pub struct BinStorage {
    pub medium: String,
    pub path: PathBuf,
    limit: u64,
}

impl BinStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "bin".to_string(),
            path: path.into(),
            limit: helper::MAX_SNAPSHOT_BYTES,
        }
    }

    /// Caps the encoded snapshot size for both save and load.
    #[cfg(test)]
    pub(crate) fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }
}

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl RecordStore for BinStorage {
    fn load(&self) -> Result<Collection, AppError> {
        let data = read_existing(&self.path)?;
        helper::deserialize_records_bin(&self.path, &data, self.limit)
    }

    fn save(&self, records: &Collection) -> Result<(), AppError> {
        // serialize fully before touching the file
        let data = helper::serialize_records_bin(records, self.limit)?;
        write_atomically(&self.path, &data)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonStorage {
    fn load(&self) -> Result<Collection, AppError> {
        let data = read_existing(&self.path)?;
        helper::deserialize_records_json(&self.path, &data)
    }

    fn save(&self, records: &Collection) -> Result<(), AppError> {
        let data = helper::serialize_records_json(records)?;
        write_atomically(&self.path, &data)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
