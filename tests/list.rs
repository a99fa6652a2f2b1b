use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn listing_without_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(dir.path().join("nothing-here.bin"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers yet"))
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn listing_corrupt_file_warns_and_shows_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("customers.json");
    std::fs::write(&file, "[{\"ID\": 1, \"Name\": ")?;

    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(&file)
        .args(["--format", "json", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers yet"))
        .stderr(predicate::str::contains("may be corrupted"));

    Ok(())
}
