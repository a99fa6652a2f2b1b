use bincode::Options;
use std::path::Path;

use crate::domain::Collection;
use crate::errors::AppError;

/// Leading bytes of every binary record file.
pub const MAGIC: &[u8; 4] = b"RREC";

/// Upper bound for an encoded snapshot body, so a bogus length prefix
/// cannot ask for an enormous allocation on decode.
pub const MAX_SNAPSHOT_BYTES: u64 = 64 * 1024 * 1024;

fn codec(limit: u64) -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(limit)
        .reject_trailing_bytes()
}

pub fn serialize_records_bin(records: &Collection, limit: u64) -> Result<Vec<u8>, AppError> {
    let body = codec(limit)
        .serialize(records)
        .map_err(|e| AppError::NotSerializable(e.to_string()))?;

    let mut data = Vec::with_capacity(MAGIC.len() + body.len());
    data.extend_from_slice(MAGIC);
    data.extend_from_slice(&body);
    Ok(data)
}

pub fn deserialize_records_bin(
    path: &Path,
    data: &[u8],
    limit: u64,
) -> Result<Collection, AppError> {
    let Some(body) = data.strip_prefix(MAGIC.as_slice()) else {
        return Err(AppError::corrupt(path, "missing record file header"));
    };

    let records: Collection = codec(limit)
        .deserialize(body)
        .map_err(|e| AppError::corrupt(path, e))?;

    ensure_unique_ids(path, records)
}

pub fn serialize_records_json(records: &Collection) -> Result<Vec<u8>, AppError> {
    serde_json::to_vec_pretty(records).map_err(|e| AppError::NotSerializable(e.to_string()))
}

pub fn deserialize_records_json(path: &Path, data: &[u8]) -> Result<Collection, AppError> {
    // serde_json reports an empty buffer as EOF, which lands here as corrupt data
    let records: Collection =
        serde_json::from_slice(data).map_err(|e| AppError::corrupt(path, e))?;

    ensure_unique_ids(path, records)
}

fn ensure_unique_ids(path: &Path, records: Collection) -> Result<Collection, AppError> {
    match records.first_duplicate_id() {
        Some(id) => Err(AppError::corrupt(
            path,
            format!("customer ID {} appears more than once", id),
        )),
        None => Ok(records),
    }
}
