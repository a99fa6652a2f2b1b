use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn add_customer() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("customers.bin");

    // Add a customer
    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(&file)
        .args(["add", "--id", "1", "--name", "  Ann  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer 1 added successfully"))
        .stdout(predicate::str::contains("Saved 1 customer to"));

    // Confirm newly added customer exist
    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("    1 - (Ann)"));

    // Attempt to add a duplicate id
    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(&file)
        .args(["add", "--id", "1", "--name", "Bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Customer ID 1 is already in the list",
        ));

    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob").not());

    Ok(())
}

#[test]
fn invalid_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("customers.bin");

    // INVALID COMMAND
    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(&file)
        .args(["and", "--id", "1", "--name", "Ann"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'and'"));

    // NON NUMERIC ID
    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(&file)
        .args(["add", "--id", "abc", "--name", "Ann"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'abc'"));

    // OUT OF RANGE ID
    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(&file)
        .args(["add", "--id", "10001", "--name", "Ann"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value '10001'"));

    assert!(!file.exists());
    Ok(())
}

#[test]
fn add_refuses_to_overwrite_corrupt_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("customers.bin");
    std::fs::write(&file, b"definitely not customers")?;

    Command::cargo_bin("rusty-records")?
        .arg("--file")
        .arg(&file)
        .args(["add", "--id", "2", "--name", "Cid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("may be corrupted"));

    assert_eq!(std::fs::read(&file)?, b"definitely not customers".to_vec());
    Ok(())
}
