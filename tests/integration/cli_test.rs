use std::path::PathBuf;
use std::process::Command;

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_alphametic"))
}

#[test]
fn test_solve_prints_winning_mapping() {
    let output = Command::new(get_binary_path())
        .arg("solve")
        .arg("to + go = out")
        .arg("--contestants")
        .arg("2")
        .arg("--seed")
        .arg("7")
        .output()
        .expect("Failed to execute alphametic");

    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Solving: to + go = out"));
    assert!(stdout.contains("Base seed: 7"));
    assert!(stdout.contains("Mapping: {g: 8, o: 1, t: 2, u: 0}"));
    assert!(stdout.contains("21 + 81 = 102"));
}

#[test]
fn test_sample_prints_report() {
    let output = Command::new(get_binary_path())
        .arg("sample")
        .arg("a + b = c")
        .arg("-n")
        .arg("4")
        .arg("-j")
        .arg("2")
        .output()
        .expect("Failed to execute alphametic");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for expected in [
        "Number of Samples: 4",
        "Parallelism: 2",
        "Total Run Time:",
        "Mean Run Time:",
        "Median Run Time:",
        "Fastest Sample:",
        "Slowest Sample:",
    ] {
        assert!(stdout.contains(expected), "missing '{}' in:\n{}", expected, stdout);
    }
}

#[test]
fn test_timeout_on_unsatisfiable_puzzle_fails() {
    let output = Command::new(get_binary_path())
        .arg("solve")
        .arg("a + a = a")
        .arg("--timeout")
        .arg("1")
        .output()
        .expect("Failed to execute alphametic");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no contestant finished"));
}

#[test]
fn test_invalid_puzzle_is_rejected() {
    let output = Command::new(get_binary_path())
        .arg("solve")
        .arg("a + 1 = b")
        .output()
        .expect("Failed to execute alphametic");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid character"));
}
