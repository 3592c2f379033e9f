use std::io::Write;

use assert_cmd::Command;
use calc_core::InputField;
use predicates::prelude::*;

fn wizard() -> Command {
    Command::cargo_bin("calc_cli").expect("calc_cli bin")
}

#[test]
fn batch_prints_every_step() {
    wizard()
        .arg("--batch")
        .assert()
        .success()
        .stdout(predicate::str::contains("STEP 01 - MISSION"))
        .stdout(predicate::str::contains("STEP 03 - POWER"))
        .stdout(predicate::str::contains("STEP 06 - LAYOUT"))
        .stdout(predicate::str::contains("Trainer"))
        .stdout(predicate::str::contains("800.0 g"))
        .stdout(predicate::str::contains("8680"))
        .stdout(predicate::str::contains("9.37 dm²"))
        .stdout(predicate::str::contains("78 mm from nose"))
        .stdout(predicate::str::contains("CONFIGURATION ADVICE"))
        .stdout(predicate::str::contains("UNDERPOWERED").not());
}

#[test]
fn mode_flag_applies_recommended_wing() {
    wizard()
        .args(["--mode", "racing", "--batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Racing"))
        .stdout(predicate::str::contains("Low Wing"))
        .stderr(predicate::str::contains("recommending Low Wing"));
}

#[test]
fn wing_flag_overrides_recommendation() {
    wizard()
        .args(["--mode", "racing", "--wing", "high-wing", "--batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("High Wing"))
        .stdout(predicate::str::contains("Low Wing").not());
}

#[test]
fn underpowered_design_is_flagged() {
    wizard()
        .args(["--mode", "payload", "--set", "empty_weight_g=2000", "--batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UNDERPOWERED! Thrust < Weight"))
        .stderr(predicate::str::contains("below the 2000 g flying weight"));
}

#[test]
fn unparsable_assignment_value_falls_back() {
    // Wingspan falls back to 1000 mm rather than failing
    wizard()
        .args(["--set", "max_wingspan_mm=wide", "--batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1000 mm"));
}

fn batch_stdout(args: &[&str]) -> String {
    let output = wizard().args(args).arg("--batch").output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn set_and_config_share_field_keys() {
    let defaults = batch_stdout(&[]);

    for field in InputField::ALL {
        let assignment = format!("{}=1234", field.key());
        let from_flag = batch_stdout(&["--set", &assignment]);

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[defaults]\n{} = \"1234\"", field.key()).unwrap();
        let from_config = batch_stdout(&["--config", file.path().to_str().unwrap()]);

        assert_eq!(from_flag, from_config, "{field}");
        assert_ne!(from_flag, defaults, "{field} had no effect");
    }
}

#[test]
fn unit_less_shorthand_keys_are_accepted() {
    assert_eq!(
        batch_stdout(&["--set", "empty_weight=1500"]),
        batch_stdout(&["--set", "empty_weight_g=1500"])
    );
}

#[test]
fn step_flag_limits_batch_output() {
    wizard()
        .args(["--step", "wing", "--batch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STEP 04 - WING"))
        .stdout(predicate::str::contains("Required Area"))
        .stdout(predicate::str::contains("STEP 01 - MISSION").not());
}

#[test]
fn step_flag_starts_interactive_session_there() {
    wizard()
        .args(["--step", "power"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("STEP 03 - POWER"))
        .stdout(predicate::str::contains("STEP 01 - MISSION").not());
}

#[test]
fn unknown_step_fails() {
    wizard()
        .args(["--step", "fuselage", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown wizard step"));
}

#[test]
fn unknown_mode_fails() {
    wizard()
        .args(["--mode", "glider", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown competition mode"));
}

#[test]
fn unknown_field_fails() {
    wizard()
        .args(["--set", "wingspan=1500", "--batch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown input field"));
}

#[test]
fn config_file_supplies_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[defaults]\nmode = \"payload\"\nempty_weight_g = \"1100\"\npayload_weight_g = \"400\""
    )
    .unwrap();

    wizard()
        .arg("--config")
        .arg(file.path())
        .arg("--batch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload"))
        .stdout(predicate::str::contains("1500.0 g"))
        .stderr(predicate::str::contains("Loaded defaults"));
}

#[test]
fn missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    wizard()
        .arg("--config")
        .arg(dir.path().join("absent.yaml"))
        .arg("--batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File error"));
}

#[test]
fn piped_interactive_session() {
    // Mission: racing, keep wing/span/prop, next; Weight: keep empty, 300 g payload, quit
    wizard()
        .write_stdin("racing\n\n\n\nn\n\n300\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("STEP 02 - WEIGHT"))
        .stdout(predicate::str::contains("1100.0 g"))
        .stdout(predicate::str::contains("Session ended."))
        .stdout(predicate::str::contains("STEP 03 - POWER").not());
}

#[test]
fn interactive_session_ends_at_eof() {
    wizard()
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session ended."));
}
