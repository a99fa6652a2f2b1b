use super::*;
use core::fmt;
use std::path::PathBuf;

/// Result of every store operation. Failures carry the reason and never
/// unwind past the caller.
pub type Outcome = Result<Success, AppError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Success {
    Loaded { count: usize, path: PathBuf },
    Saved { count: usize, path: PathBuf },
    Added(u32),
    Removed(u32),
    Imported { added: usize, skipped: usize, path: PathBuf },
    Exported { count: usize, path: PathBuf },
}

impl fmt::Display for Success {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success::Loaded { count, path } => {
                write!(f, "Loaded {} from {}", customers(*count), path.display())
            }
            Success::Saved { count, path } => {
                write!(f, "Saved {} to {}", customers(*count), path.display())
            }
            Success::Added(id) => write!(f, "Customer {} added successfully", id),
            Success::Removed(id) => write!(f, "Customer {} removed successfully", id),
            Success::Imported {
                added,
                skipped,
                path,
            } => write!(
                f,
                "Imported {} from {} ({} skipped)",
                customers(*added),
                path.display(),
                plural(*skipped, "duplicate", "duplicates")
            ),
            Success::Exported { count, path } => {
                write!(f, "Exported {} to {}", customers(*count), path.display())
            }
        }
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn customers(count: usize) -> String {
    plural(count, "customer", "customers")
}

/// Human readable line for any outcome, used by both the menu and the subcommands.
pub fn describe(outcome: &Outcome) -> String {
    match outcome {
        Ok(success) => success.to_string(),
        Err(err) => format!("Error: {}", err),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn describes_success_and_failure() {
        let ok: Outcome = Ok(Success::Added(3));
        let err: Outcome = Err(AppError::KeyNotFound(3));

        assert_eq!(describe(&ok), "Customer 3 added successfully");
        assert_eq!(describe(&err), "Error: Customer ID 3 was not found");
    }

    #[test]
    fn counts_read_naturally() {
        let path = PathBuf::from("c.bin");

        let one = Success::Saved { count: 1, path: path.clone() };
        let none = Success::Loaded { count: 0, path: path.clone() };
        let imported = Success::Imported { added: 1, skipped: 2, path: path.clone() };
        let exported = Success::Exported { count: 3, path };

        assert_eq!(one.to_string(), "Saved 1 customer to c.bin");
        assert_eq!(none.to_string(), "Loaded 0 customers from c.bin");
        assert_eq!(imported.to_string(), "Imported 1 customer from c.bin (2 duplicates skipped)");
        assert_eq!(exported.to_string(), "Exported 3 customers to c.bin");
    }
}
