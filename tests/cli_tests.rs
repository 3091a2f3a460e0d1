use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "budget";

fn budget(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGET_TRACKER_DATA_DIR", data_dir.path());
    cmd.env_remove("BUDGET_TRACKER_LOG");
    cmd
}

/// Run `budget add` and return the new transaction id
fn add(data_dir: &TempDir, args: &[&str]) -> String {
    let output = budget(data_dir).arg("add").args(args).output().unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Added transaction "))
        .expect("add prints the id")
        .trim()
        .to_string()
}

fn seed_december(data_dir: &TempDir) {
    add(data_dir, &["Income", "Salary", "100", "--date", "2024-12-01"]);
    add(data_dir, &["Expense", "Food", "50", "-d", "Lunch, with friends", "--date", "2024-12-05"]);
    add(data_dir, &["Expense", "Transport", "30", "--date", "2024-12-10"]);
}

#[test]
fn init_creates_ledger_with_header() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialized budget tracker"));

    let ledger = std::fs::read_to_string(data_dir.path().join("data/transactions.csv")).unwrap();
    assert_eq!(ledger, "ID,Date,Type,Category,Amount,Description\n");
    assert!(data_dir.path().join("config.json").exists());
}

#[test]
fn summary_reports_totals_and_breakdown() {
    let data_dir = TempDir::new().unwrap();
    seed_december(&data_dir);

    budget(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total Income:       $    100.00"))
        .stdout(contains("Total Expenses:     $     80.00"))
        .stdout(contains("Balance:            $     20.00"))
        .stdout(contains("( 62.5%)"))
        .stdout(contains("( 37.5%)"));
}

#[test]
fn summary_json_matches_payload_shape() {
    let data_dir = TempDir::new().unwrap();
    seed_december(&data_dir);

    let output = budget(&data_dir).args(["summary", "--json"]).output().unwrap();
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(payload["total_income"], 100.0);
    assert_eq!(payload["total_expense"], 80.0);
    assert_eq!(payload["balance"], 20.0);
    assert_eq!(payload["expenses_by_category"]["Food"], 50.0);
    assert_eq!(payload["monthly_summary"]["2024-12"]["expense"], 80.0);
    assert_eq!(payload["transaction_count"], 3);
}

#[test]
fn monthly_report_lists_months() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .arg("monthly")
        .assert()
        .success()
        .stdout(contains("No transactions recorded."));

    seed_december(&data_dir);
    add(&data_dir, &["Expense", "Bills", "20", "--date", "2025-01-02"]);

    budget(&data_dir)
        .arg("monthly")
        .assert()
        .success()
        .stdout(contains("2024-12:"))
        .stdout(contains("2025-01:"))
        .stdout(contains("  Balance:  $    -20.00"));
}

#[test]
fn add_rejects_invalid_input() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .args(["add", "Expense", "Food", "0"])
        .assert()
        .failure()
        .stderr(contains("Amount must be at least $0.01"));

    budget(&data_dir)
        .args(["add", "Expense", "Food", "-5"])
        .assert()
        .failure()
        .stderr(contains("Amount must be at least $0.01"));

    budget(&data_dir)
        .args(["add", "Expense", "Food", "1000000.01"])
        .assert()
        .failure()
        .stderr(contains("Amount cannot exceed $1000000.00"));

    budget(&data_dir)
        .args(["add", "Gift", "Food", "5"])
        .assert()
        .failure()
        .stderr(contains("Invalid type 'Gift'"));

    budget(&data_dir)
        .args(["add", "Expense", "Food", "5", "--date", "2024-13-01"])
        .assert()
        .failure()
        .stderr(contains("Date must be in format: YYYY-MM-DD"));

    budget(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}

#[test]
fn list_filters_by_type_and_category() {
    let data_dir = TempDir::new().unwrap();
    seed_december(&data_dir);

    budget(&data_dir)
        .args(["list", "--type", "Expense"])
        .assert()
        .success()
        .stdout(contains("Food").and(contains("Transport")))
        .stdout(contains("Salary").not());

    budget(&data_dir)
        .args(["list", "--category", "Salary"])
        .assert()
        .success()
        .stdout(contains("+$100.00"))
        .stdout(contains("1 transaction(s)"));

    budget(&data_dir)
        .args(["list", "--date", "2024-12-05"])
        .assert()
        .success()
        .stdout(contains("Lunch, with friends"));

    budget(&data_dir)
        .args(["list", "--type", "Gift"])
        .assert()
        .failure()
        .stderr(contains("Invalid type filter"));
}

#[test]
fn delete_removes_one_transaction() {
    let data_dir = TempDir::new().unwrap();
    seed_december(&data_dir);
    let id = add(&data_dir, &["Expense", "Shopping", "15"]);

    budget(&data_dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(contains(format!("Deleted transaction {}", id)));

    budget(&data_dir)
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(contains("Transaction not found"));

    budget(&data_dir)
        .args(["summary", "--json"])
        .assert()
        .success()
        .stdout(contains("\"transaction_count\": 3"));
}

#[test]
fn delete_accepts_unique_prefix() {
    let data_dir = TempDir::new().unwrap();
    let id = add(&data_dir, &["Income", "Bonus", "250"]);

    budget(&data_dir)
        .args(["delete", &id[..8]])
        .assert()
        .success()
        .stdout(contains(id.as_str()));
}

#[test]
fn clear_requires_confirmation() {
    let data_dir = TempDir::new().unwrap();
    seed_december(&data_dir);

    budget(&data_dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(contains("--yes"));

    budget(&data_dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed 3 transaction(s)."));

    budget(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("No expenses recorded."));
}

#[test]
fn export_json_to_file() {
    let data_dir = TempDir::new().unwrap();
    seed_december(&data_dir);
    let out = data_dir.path().join("export.json");

    budget(&data_dir)
        .args(["export", "json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported ledger"));

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["transaction_count"], 3);
    assert_eq!(doc["transactions"][1]["description"], "Lunch, with friends");
    assert_eq!(doc["summary"]["balance"], 20.0);
}

#[test]
fn export_yaml_to_stdout() {
    let data_dir = TempDir::new().unwrap();
    seed_december(&data_dir);

    budget(&data_dir)
        .args(["export", "yaml"])
        .assert()
        .success()
        .stdout(contains("# Budget Tracker Export"))
        .stdout(contains("category: Transport"));
}

#[test]
fn categories_lists_catalog() {
    let data_dir = TempDir::new().unwrap();

    budget(&data_dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("Income").and(contains("Other Expense")));

    let output = budget(&data_dir).args(["categories", "--json"]).output().unwrap();
    let catalog: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(catalog["Income"][0], "Salary");
    assert_eq!(catalog["Expense"][0], "Food");
}

#[test]
fn corrupt_ledger_is_reported() {
    let data_dir = TempDir::new().unwrap();
    seed_december(&data_dir);

    let ledger = data_dir.path().join("data/transactions.csv");
    let mut contents = std::fs::read_to_string(&ledger).unwrap();
    contents.push_str("bad,row\n");
    std::fs::write(&ledger, contents).unwrap();

    budget(&data_dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(contains("Corrupt ledger record at line 5"));
}

#[test]
fn data_dir_flag_overrides_environment() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    budget(&env_dir)
        .arg("--data-dir")
        .arg(flag_dir.path())
        .args(["add", "Income", "Salary", "10"])
        .assert()
        .success();

    assert!(flag_dir.path().join("data/transactions.csv").exists());
    budget(&env_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}

#[test]
fn stats_reports_quick_figures() {
    let data_dir = TempDir::new().unwrap();

    let output = budget(&data_dir).args(["stats", "--json"]).output().unwrap();
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total_transactions"], 0);
    assert_eq!(stats["average_expense"], 0.0);

    seed_december(&data_dir);

    let output = budget(&data_dir).args(["stats", "--json"]).output().unwrap();
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total_transactions"], 3);
    assert_eq!(stats["average_expense"], 40.0);
    assert_eq!(stats["categories_count"], 2);

    budget(&data_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Average Expense:    $     40.00"));
}

#[test]
fn show_prints_transaction_details() {
    let data_dir = TempDir::new().unwrap();
    let id = add(&data_dir, &["Expense", "Food", "12.50", "-d", "Bagel"]);

    budget(&data_dir)
        .args(["show", &id[..8]])
        .assert()
        .success()
        .stdout(contains(format!("Transaction: {}", id)))
        .stdout(contains("Description: Bagel"));

    budget(&data_dir)
        .args(["show", "missing"])
        .assert()
        .failure()
        .stderr(contains("Transaction not found"));
}
