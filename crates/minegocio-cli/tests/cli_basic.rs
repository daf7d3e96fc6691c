//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data
//! directory and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "minegocio-cli", "--quiet", "--"])
        .args(args)
        .env("MINEGOCIO_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn progress_status_prints_snapshot_json() {
    let (stdout, _, code) = run_cli(&["progreso", "status"]);
    assert_eq!(code, 0, "progreso status failed");
    assert!(stdout.contains("\"points\""));
    assert!(stdout.contains("\"level\""));
}

#[test]
fn progress_medallas_lists_the_catalog() {
    let (stdout, _, code) = run_cli(&["progreso", "medallas"]);
    assert_eq!(code, 0, "progreso medallas failed");
    assert!(stdout.contains("Arquitecto de Negocios"));
    assert!(stdout.contains("Maestro del Marketing"));
}

#[test]
fn break_even_set_then_show() {
    let (_, _, code) = run_cli(&[
        "breakeven", "set", "--fijos", "500000", "--precio", "2000", "--variable", "1000",
    ]);
    assert_eq!(code, 0, "breakeven set failed");

    let (stdout, _, code) = run_cli(&["breakeven", "show"]);
    assert_eq!(code, 0, "breakeven show failed");
    assert!(stdout.contains("500 unidades"));
}

#[test]
fn incomplete_module_reports_why() {
    // A fresh canvas cannot be completed.
    let (_, stderr, code) = run_cli(&["canvas", "complete"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Completa todas las secciones"));
}

#[test]
fn manual_toc_shows_reading_progress() {
    let (stdout, _, code) = run_cli(&["manual", "toc"]);
    assert_eq!(code, 0, "manual toc failed");
    assert!(stdout.contains("Manual Interactivo del Emprendedor"));
    assert!(stdout.contains("de 13 secciones"));
}

#[test]
fn config_get_known_key() {
    let (stdout, _, code) = run_cli(&["config", "get", "assistant.model"]);
    assert_eq!(code, 0, "config get failed");
    assert!(stdout.contains("gemini"));
}
