pub use crate::cli::{command, display_record, run_app, session};
pub use crate::domain::{
    Collection, Outcome, Record, Success, add,
    record::{self, MAX_ID, MIN_ID, parse_id, parse_lookup_id},
    remove,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, RecordStore, StorageMediums, parse_storage_type};
