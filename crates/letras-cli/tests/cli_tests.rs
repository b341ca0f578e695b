//! Integration tests for the `letras` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, including global flags, config files, JSON
//! output and error exits.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the letras.json fixture (connector "punto", apocope on).
fn config_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/letras.json")
}

fn letras() -> Command {
    let mut cmd = Command::cargo_bin("letras").unwrap();
    cmd.env_remove("LETRAS_APOCOPE")
        .env_remove("LETRAS_CONNECTOR")
        .env_remove("RUST_LOG");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn words_with_default_decimals() {
    letras()
        .args(["words", "1234567.89"])
        .assert()
        .success()
        .stdout(
            "UN MILLÓN DOSCIENTOS TREINTA Y CUATRO MIL QUINIENTOS SESENTA Y SIETE \
             CON OCHENTA Y NUEVE\n",
        );
}

#[test]
fn words_without_decimals() {
    letras()
        .args(["words", "100", "-d", "0"])
        .assert()
        .success()
        .stdout("CIEN\n");
}

#[test]
fn money_default_labels() {
    letras()
        .args(["money", "100"])
        .assert()
        .success()
        .stdout("CIEN PESOS\n");
}

#[test]
fn money_custom_labels() {
    letras()
        .args(["money", "1100.50", "--currency", "soles", "--cents", "centimos"])
        .assert()
        .success()
        .stdout("MIL CIEN SOLES CON CINCUENTA CENTIMOS\n");
}

#[test]
fn label_years_and_months() {
    letras()
        .args(["label", "5.2", "-d", "1", "--whole", "años", "--fraction", "meses"])
        .assert()
        .success()
        .stdout("CINCO AÑOS CON DOS MESES\n");
}

#[test]
fn label_requires_both_labels() {
    letras()
        .args(["label", "5.2", "--whole", "años"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fraction"));
}

#[test]
fn invoice_rounds_into_whole_part() {
    letras()
        .args(["invoice", "599.999", "--currency", "soles"])
        .assert()
        .success()
        .stdout("SEISCIENTOS CON 00/100 SOLES\n");
}

#[test]
fn demo_prints_all_modes() {
    letras()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("words:"))
        .stdout(predicate::str::contains("CENTAVOS"))
        .stdout(predicate::str::contains("89/100 PESOS"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn apocope_flag() {
    letras()
        .args(["--apocope", "words", "201", "-d", "0"])
        .assert()
        .success()
        .stdout("DOSCIENTOS UN\n");
}

#[test]
fn apocope_from_env() {
    letras()
        .env("LETRAS_APOCOPE", "true")
        .args(["words", "101", "-d", "0"])
        .assert()
        .success()
        .stdout("CIENTO UN\n");
}

#[test]
fn apocope_from_env_accepts_boolish_values() {
    for value in ["1", "yes", "on"] {
        letras()
            .env("LETRAS_APOCOPE", value)
            .args(["words", "201", "-d", "0"])
            .assert()
            .success()
            .stdout("DOSCIENTOS UN\n");
    }
    for value in ["0", "no", "off"] {
        letras()
            .env("LETRAS_APOCOPE", value)
            .args(["words", "201", "-d", "0"])
            .assert()
            .success()
            .stdout("DOSCIENTOS UNO\n");
    }
}

#[test]
fn apocope_flag_before_subcommand_takes_no_value() {
    letras()
        .args(["--apocope", "words", "31", "-d", "0"])
        .assert()
        .success()
        .stdout("TREINTA Y UN\n");
}

#[test]
fn connector_flag_after_subcommand() {
    letras()
        .args(["words", "3.25", "--connector", "y"])
        .assert()
        .success()
        .stdout("TRES Y VEINTICINCO\n");
}

#[test]
fn config_file_applies() {
    letras()
        .args(["--config", config_path(), "words", "21.5", "-d", "1"])
        .assert()
        .success()
        .stdout("VEINTIUN PUNTO CINCO\n");
}

#[test]
fn connector_flag_overrides_config_file() {
    letras()
        .args([
            "--config",
            config_path(),
            "--connector",
            "con",
            "words",
            "21.5",
            "-d",
            "1",
        ])
        .assert()
        .success()
        .stdout("VEINTIUN CON CINCO\n");
}

#[test]
fn apocope_env_false_overrides_config_file() {
    letras()
        .env("LETRAS_APOCOPE", "false")
        .args(["--config", config_path(), "words", "21", "-d", "0"])
        .assert()
        .success()
        .stdout("VEINTIUNO\n");
}

#[test]
fn apocope_flag_false_overrides_config_file() {
    letras()
        .args(["--config", config_path(), "--apocope=false", "words", "101", "-d", "0"])
        .assert()
        .success()
        .stdout("CIENTO UNO\n");
}

#[test]
fn missing_config_file_fails() {
    letras()
        .args(["--config", "/nonexistent/letras.json", "words", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn json_output() {
    let output = letras()
        .args(["--json", "invoice", "1.20", "--currency", "soles"])
        .output()
        .expect("invoice should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["mode"], "invoice");
    assert_eq!(value["decimals"], 2);
    assert_eq!(value["text"], "UNO CON 20/100 SOLES");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn out_of_range_fails() {
    letras()
        .args(["words", "1000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn negative_number_fails_with_range_error() {
    letras()
        .args(["money", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn non_numeric_input_fails() {
    letras()
        .args(["words", "doce"])
        .assert()
        .failure();
}
