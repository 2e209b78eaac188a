use assert_cmd::Command;
use predicates::str::contains;
use std::fs;

const PAN_TEXT: &str = "INCOME TAX DEPARTMENT\nABCDE1234F\nJOHN SMITH\nFather's Name: ROBERT SMITH\nDate of Birth: 15/08/1990\n";

fn cmd() -> Command {
    Command::cargo_bin("idverify").unwrap()
}

#[test]
fn extract_json() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("pan.txt");
    fs::write(&text, PAN_TEXT).unwrap();

    cmd()
        .args(["--json", "extract", "--doc-type", "PAN", "--text"])
        .arg(&text)
        .assert()
        .success()
        .stdout(contains("\"id_number\": \"ABCDE1234F\""))
        .stdout(contains("\"name\": \"JOHN SMITH\""));
}

#[test]
fn extract_from_stdin() {
    cmd()
        .args(["extract", "--doc-type", "aadhar", "--text", "-"])
        .write_stdin("Asha Rao\nDOB: 31/01/1985\n1234 5678 9012\n")
        .assert()
        .success()
        .stdout(contains("ID Number: 123456789012"));
}

#[test]
fn unknown_document_type_rejected() {
    cmd()
        .args(["extract", "--doc-type", "passport", "--text", "-"])
        .assert()
        .failure();
}

#[test]
fn verify_report() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("pan.txt");
    fs::write(&text, PAN_TEXT).unwrap();

    cmd()
        .args(["verify", "--doc-type", "pan", "--name", "John Smith", "--dob", "1990-08-15"])
        .args(["--id-number", "ABCDE1234F", "--text"])
        .arg(&text)
        .assert()
        .success()
        .stdout(contains("Identity verification result: VERIFIED"));
}

#[test]
fn verify_rejects_non_iso_claimed_date() {
    cmd()
        .args(["verify", "--doc-type", "pan", "--name", "John Smith", "--dob", "15/08/1990"])
        .args(["--id-number", "ABCDE1234F", "--text", "-"])
        .write_stdin(PAN_TEXT)
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn verify_records_registration() {
    let dir = tempfile::tempdir().unwrap();
    let text = dir.path().join("pan.txt");
    let image = dir.path().join("card.jpg");
    let log = dir.path().join("registrations.json");
    let uploads = dir.path().join("uploads");
    fs::write(&text, PAN_TEXT).unwrap();
    fs::write(&image, b"not really a jpeg").unwrap();

    cmd()
        .args(["--json", "verify", "--doc-type", "pan", "--name", "John Smith"])
        .args(["--dob", "1990-08-15", "--id-number", "abcde1234f", "--record"])
        .arg("--text")
        .arg(&text)
        .arg("--image")
        .arg(&image)
        .arg("--registrations")
        .arg(&log)
        .arg("--upload-dir")
        .arg(&uploads)
        .assert()
        .success()
        .stdout(contains("\"registration_id\": 1"))
        .stdout(contains("\"id_verified\": false"));

    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&log).unwrap()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id_number_input"], "abcde1234f");
    assert_eq!(entries[0]["ocr_extracted_id_number"], "ABCDE1234F");

    let stored = entries[0]["image_filename"].as_str().unwrap();
    assert!(stored.ends_with("_card.jpg"));
    assert!(uploads.join(stored).exists());
}
