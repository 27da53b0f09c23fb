use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "7"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 7);
    assert!(matches!(v["winner"].as_str(), Some("human") | Some("automated")));
    assert!(v["shots"].as_u64().unwrap() >= 10);
}

#[test]
fn sim_binary_reports_shot_limit() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--seed", "7", "--shot-limit", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("No winner after 3 shots"));
}
