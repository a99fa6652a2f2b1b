pub mod outcome;
pub mod record;

use crate::errors::AppError;
use serde::{Deserialize, Serialize};

pub use outcome::{Outcome, Success};
pub use record::{Collection, Record, add, remove};
