use std::process::Command;

fn run(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_cart-ledger"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// `type,amount` of each history row, dropping the timestamp.
fn rows(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1)
        .map(|line| line.rsplit_once(',').unwrap().0.to_string())
        .collect()
}

#[test]
fn valid_operations() {
    let (stdout, stderr, success) = run(&["tests/fixtures/valid.csv"]);

    assert!(success);
    assert!(stderr.is_empty());

    assert_eq!(stdout.lines().next(), Some("type,amount,timestamp"));
    // the second credit is rejected while 300 of the loan is outstanding
    assert_eq!(
        rows(&stdout),
        vec!["deposit,100", "withdrawal,25", "credit,500", "credit,200"]
    );
}

#[test]
fn errors_warn_but_do_not_block() {
    let (stdout, stderr, success) = run(&["tests/fixtures/with_errors.csv"]);

    assert!(success);
    assert!(stderr.contains("unrecognized operation type"));
    assert!(stderr.contains("missing amount"));

    assert_eq!(rows(&stdout), vec!["deposit,100", "withdrawal,25"]);
}

#[test]
fn credit_limit_argument() {
    let (stdout, _, success) = run(&["tests/fixtures/valid.csv", "100"]);

    assert!(success);
    // 500 exceeds the limit, so the repayment has no loan to pay and only 50 is drawn
    assert_eq!(
        rows(&stdout),
        vec!["deposit,100", "withdrawal,25", "credit,50"]
    );
}

#[test]
fn all_rejected_still_prints_header() {
    let (stdout, _, success) = run(&["tests/fixtures/all_rejected.csv"]);

    assert!(success);
    assert_eq!(stdout, "type,amount,timestamp\n");
}

#[test]
fn invalid_credit_limit_is_rejected() {
    for limit in ["NaN", "-5", "inf", "lots"] {
        let (stdout, stderr, success) = run(&["tests/fixtures/valid.csv", limit]);

        assert!(!success, "limit {limit} should be rejected");
        assert!(stdout.is_empty());
        assert!(stderr.contains("invalid credit limit"));
    }
}

#[test]
fn missing_path_prints_usage() {
    let (_, stderr, success) = run(&[]);

    assert!(!success);
    assert!(stderr.contains("usage"));
}
