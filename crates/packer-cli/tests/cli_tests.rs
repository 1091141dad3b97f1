use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn packer_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("packer").expect("Failed to find packer binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

/// Pulls the identifier out of a line such as `Created ... ID: abc`.
fn extract_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let line = text
        .lines()
        .find(|line| line.contains("ID: "))
        .expect("Output should contain an ID");
    line.rsplit("ID: ")
        .next()
        .unwrap()
        .trim_end_matches(')')
        .trim()
        .to_string()
}

fn create_list(db_path: &Path, args: &[&str]) -> String {
    let output = packer_cmd(db_path)
        .args(["list", "create"])
        .args(args)
        .output()
        .expect("Failed to run packer");
    assert!(output.status.success());
    extract_id(&output.stdout)
}

fn add_item(db_path: &Path, list_id: &str, category: &str, name: &str) -> String {
    let output = packer_cmd(db_path)
        .args(["item", "add", list_id, category, name])
        .output()
        .expect("Failed to run packer");
    assert!(output.status.success());
    extract_id(&output.stdout)
}

#[test]
fn test_cli_create_list_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    packer_cmd(&db_path)
        .args([
            "list",
            "create",
            "Summer Beach Vacation",
            "--destination",
            "Maldives",
            "--start",
            "2023-07-15",
            "--end",
            "2023-07-25",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created packing list with ID:"))
        .stdout(predicate::str::contains("# Summer Beach Vacation"))
        .stdout(predicate::str::contains("- Destination: Maldives"))
        .stdout(predicate::str::contains("- Dates: Jul 15 - Jul 25"))
        .stdout(predicate::str::contains("## Essentials (0/0) `essentials`"))
        .stdout(predicate::str::contains("## Toiletries"));
}

#[test]
fn test_cli_create_list_blank_title() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    packer_cmd(&db_path)
        .args(["list", "create", "", "--destination", "Tokyo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Untitled Trip"))
        .stdout(predicate::str::contains("- Destination: Tokyo"));
}

#[test]
fn test_cli_create_list_with_categories() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    packer_cmd(&db_path)
        .args([
            "list",
            "create",
            "Conference",
            "--categories",
            "documents,electronics",
            "--toggle",
            "electronics",
            "--toggle",
            "misc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Documents"))
        .stdout(predicate::str::contains("## Miscellaneous"))
        .stdout(predicate::str::contains("## Electronics").not())
        .stdout(predicate::str::contains("## Essentials").not());
}

#[test]
fn test_cli_create_list_unknown_category() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    packer_cmd(&db_path)
        .args(["list", "create", "Trip", "--toggle", "snacks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'snacks'"));
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    packer_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No packing lists found."));
}

#[test]
fn test_cli_list_search() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    create_list(&db_path, &["Paris Trip"]);
    create_list(&db_path, &["Ski Week", "--destination", "Alps"]);

    packer_cmd(&db_path)
        .args(["list", "ls", "paris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Paris Trip"))
        .stdout(predicate::str::contains("- **Destination**: No destination"))
        .stdout(predicate::str::contains("Ski Week").not());

    packer_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris Trip"))
        .stdout(predicate::str::contains("Ski Week"));
}

#[test]
fn test_cli_item_workflow() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let list_id = create_list(&db_path, &["Beach"]);
    let passport = add_item(&db_path, &list_id, "essentials", "Passport");
    add_item(&db_path, &list_id, "essentials", "Wallet");
    add_item(&db_path, &list_id, "clothing", "Shorts");

    packer_cmd(&db_path)
        .args(["item", "toggle", &list_id, "essentials", &passport])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as packed"))
        .stdout(predicate::str::contains("- [x] Passport"));

    packer_cmd(&db_path)
        .args(["list", "show", &list_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 1 of 3 items packed (33%)"))
        .stdout(predicate::str::contains("## Essentials (1/2)"));

    packer_cmd(&db_path)
        .args([
            "item",
            "edit",
            &list_id,
            "essentials",
            &passport,
            "Passport and visa",
            "-q",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed from 'Passport'"))
        .stdout(predicate::str::contains("- [x] Passport and visa (x2)"));

    packer_cmd(&db_path)
        .args(["item", "delete", &list_id, "essentials", &passport])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted item 'Passport and visa'"));

    packer_cmd(&db_path)
        .args(["list", "show", &list_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Progress: 0 of 2 items packed (0%)"));
}

#[test]
fn test_cli_add_item_blank_name() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let list_id = create_list(&db_path, &["Beach"]);

    packer_cmd(&db_path)
        .args(["item", "add", &list_id, "essentials", "   ", "-q", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item name must not be empty"));
}

#[test]
fn test_cli_toggle_missing_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let list_id = create_list(&db_path, &["Beach"]);

    packer_cmd(&db_path)
        .args(["item", "toggle", &list_id, "essentials", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No item with ID nope"));
}

#[test]
fn test_cli_delete_list_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let list_id = create_list(&db_path, &["Old Trip"]);

    packer_cmd(&db_path)
        .args(["list", "delete", &list_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("confirmation"));

    packer_cmd(&db_path)
        .args(["list", "delete", &list_id, "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted packing list 'Old Trip'"));

    packer_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No packing lists found."));
}

#[test]
fn test_cli_invalid_list_id() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    packer_cmd(&db_path)
        .args(["list", "show", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Packing list with ID missing not found"));

    packer_cmd(&db_path)
        .args(["item", "add", "missing", "essentials", "Hat"])
        .assert()
        .failure();
}

#[test]
fn test_cli_categories() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    packer_cmd(&db_path)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("`essentials` Essentials (default)"))
        .stdout(predicate::str::contains("`misc` Miscellaneous"));
}

#[test]
fn test_cli_help_output() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    packer_cmd(&db_path)
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A travel packing checklist"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("item"))
        .stdout(predicate::str::contains("categories"));
}

#[test]
fn test_cli_version_output() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    packer_cmd(&db_path)
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("packer "));
}
