use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "mars-inspector-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_json_report_parses_back_to_table() {
    let exe = env!("CARGO_BIN_EXE_mars-inspector");
    let output = Command::new(exe)
        .args(["--report", "json"])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["cardCount"], 137);
    assert_eq!(value["tags"][0], "Science,");
    assert_eq!(value["milestones"].as_array().map(Vec::len), Some(5));
}

#[test]
fn cli_single_field_writes_output_file() {
    let exe = env!("CARGO_BIN_EXE_mars-inspector");
    let output_path = temp_path("field");
    let status = Command::new(exe)
        .args(["--field", "resources", "--report", "markdown", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.starts_with("## resources"));
    assert!(content.contains("- `Megacredit`"));
    assert!(content.contains("- `Heat`"));
}

#[test]
fn cli_rejects_unknown_field() {
    let exe = env!("CARGO_BIN_EXE_mars-inspector");
    let output = Command::new(exe)
        .args(["--field", "CorporationCount"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown constants field"));
}

#[test]
fn cli_audit_passes_without_strict() {
    let exe = env!("CARGO_BIN_EXE_mars-inspector");
    let output_path = temp_path("audit");
    let status = Command::new(exe)
        .args(["--audit", "--verbose", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Constants Audit"));
    assert!(content.contains("tags[0]"));
    assert!(content.contains("specialTiles[0]"));
}

#[test]
fn cli_strict_audit_fails_on_warnings() {
    let exe = env!("CARGO_BIN_EXE_mars-inspector");
    let output = Command::new(exe)
        .args(["--audit", "--strict", "--report", "json"])
        .output()
        .expect("run cli");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["findings"][0]["kind"], "stray_punctuation");
}
