use super::*;

use crate::prelude::{Record, add};
use csv::{Reader, Writer};

const EXPORT_PATH: &str = "./csv/customers.csv";
const IMPORT_PATH: &str = "./csv/customers.csv";

pub fn export_records_to_csv(records: &Collection, des: Option<&str>) -> Outcome {
    let mut file_path = PathBuf::from(EXPORT_PATH);

    if let Some(path) = des {
        file_path = PathBuf::from(path);

        if file_path.is_dir() {
            file_path = file_path.join("customers.csv");
        } else if file_path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation(
                "Export file must be a .csv file".to_string(),
            ));
        }
    }

    create_file_parent(&file_path)?;

    let mut writer = Writer::from_path(&file_path)?;

    let mut count = 0;
    for record in records {
        writer.serialize(record)?;
        count += 1;
    }

    writer.flush()?;
    info!(path = %file_path.display(), count, "customers exported");

    Ok(Success::Exported {
        count,
        path: file_path,
    })
}

/// Adds every row of the CSV file to `records`. Rows whose id is already
/// taken are skipped and counted, anything unreadable aborts the import
/// and hands back the collection untouched.
pub fn import_records_from_csv(records: Collection, src: Option<&str>) -> (Collection, Outcome) {
    let file_path = PathBuf::from(src.unwrap_or(IMPORT_PATH));

    let rows = match read_rows(&file_path) {
        Ok(rows) => rows,
        Err(err) => return (records, Err(err)),
    };

    let mut records = records;
    let mut added = 0;
    let mut skipped = 0;

    for row in rows {
        let (next, outcome) = add(records, row.id, &row.name);
        records = next;

        match outcome {
            Ok(_) => added += 1,
            Err(err) => {
                debug!(error = %err, "skipping csv row");
                skipped += 1;
            }
        }
    }

    (
        records,
        Ok(Success::Imported {
            added,
            skipped,
            path: file_path,
        }),
    )
}

fn read_rows(file_path: &Path) -> Result<Vec<Record>, AppError> {
    if !file_path.exists() {
        return Err(AppError::NotFound(file_path.to_path_buf()));
    }

    if file_path.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(file_path)?;

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let record: Record = result?;
        rows.push(record);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn export_then_import_skips_duplicates() -> Result<(), AppError> {
        let dir = tempdir()?;
        let out = dir.path().join("out.csv");
        let out = out.to_string_lossy().to_string();

        let records = Collection::from_records(vec![Record::new(1, "Ann"), Record::new(2, "Cid, Jr.")]);
        let exported = export_records_to_csv(&records, Some(out.as_str()))?;
        assert!(matches!(exported, Success::Exported { count: 2, .. }));

        let text = fs::read_to_string(&out)?;
        assert!(text.starts_with("ID,Name\n"));

        let existing = Collection::from_records(vec![Record::new(2, "Someone Else")]);
        let (merged, outcome) = import_records_from_csv(existing, Some(out.as_str()));

        assert!(matches!(
            outcome?,
            Success::Imported {
                added: 1,
                skipped: 1,
                ..
            }
        ));
        assert_eq!(
            merged.as_slice(),
            &[Record::new(2, "Someone Else"), Record::new(1, "Ann")]
        );
        Ok(())
    }

    #[test]
    fn export_into_directory_uses_default_name() -> Result<(), AppError> {
        let dir = tempdir()?;
        let des = dir.path().to_string_lossy().to_string();

        let outcome = export_records_to_csv(&Collection::new(), Some(des.as_str()))?;

        assert_eq!(
            outcome,
            Success::Exported {
                count: 0,
                path: dir.path().join("customers.csv")
            }
        );
        Ok(())
    }

    #[test]
    fn export_rejects_other_extensions() {
        let outcome = export_records_to_csv(&Collection::new(), Some("customers.txt"));

        assert!(matches!(outcome, Err(AppError::Validation(_))));
    }

    #[test]
    fn bad_import_leaves_records_alone() -> Result<(), AppError> {
        let dir = tempdir()?;
        let src = dir.path().join("bad.csv");
        fs::write(&src, "ID,Name\n1,Ann\nnot-a-number,Bob\n")?;
        let src = src.to_string_lossy().to_string();

        let records = Collection::from_records(vec![Record::new(9, "Kept")]);
        let (after, outcome) = import_records_from_csv(records.clone(), Some(src.as_str()));

        assert!(matches!(outcome, Err(AppError::Csv(_))));
        assert_eq!(after, records);

        let missing = dir.path().join("missing.csv").to_string_lossy().to_string();
        let (after, outcome) = import_records_from_csv(records.clone(), Some(missing.as_str()));
        assert!(matches!(outcome, Err(AppError::NotFound(_))));
        assert_eq!(after, records);
        Ok(())
    }
}
