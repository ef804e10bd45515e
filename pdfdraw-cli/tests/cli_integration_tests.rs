//! Integration tests for the pdfdraw CLI
//!
//! Tests command-line interface functionality including:
//! - Demo generation
//! - Rendering scene files
//! - Error handling for missing and malformed scenes

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary path
fn get_cli_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    if path.ends_with("deps") {
        path.pop(); // Remove "deps" directory
    }
    path.push("pdfdraw");
    #[cfg(windows)]
    path.set_extension("exe");
    path
}

/// Test helper to create a temporary directory
fn setup_temp_dir() -> TempDir {
    tempdir().expect("Failed to create temp directory")
}

/// Test helper to run CLI command and return output
fn run_cli_command(args: &[&str]) -> Result<std::process::Output> {
    let output = Command::new(get_cli_path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

/// Test helper to check if PDF file exists and has content
fn assert_pdf_exists_and_valid(path: &Path) {
    assert!(path.exists(), "PDF file should exist: {}", path.display());
    let content = fs::read(path).expect("Failed to read PDF file");
    assert!(
        content.len() > 100,
        "PDF file should have content (> 100 bytes)"
    );
    assert!(
        content.starts_with(b"%PDF-1.7"),
        "File should start with PDF header"
    );
    assert!(content.ends_with(b"%%EOF\n"), "File should end with EOF marker");
}

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    haystack
        .windows(needle.len())
        .filter(|window| *window == needle)
        .count()
}

#[test]
fn test_cli_demo_command() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("demo.pdf");

    let output = run_cli_command(&["demo", "-o", output_path.to_str().unwrap()])
        .expect("CLI command should succeed");

    assert!(output.status.success(), "Command should succeed");
    assert_pdf_exists_and_valid(&output_path);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Demo PDF created successfully"),
        "Should show success message"
    );
}

#[test]
fn test_cli_render_scene() {
    let temp_dir = setup_temp_dir();
    let scene_path = temp_dir.path().join("scene.json");
    let output_path = temp_dir.path().join("scene.pdf");

    fs::write(
        &scene_path,
        r#"{
            "title": "Scene Test",
            "author": "CLI Tests",
            "pages": [
                {
                    "shapes": [
                        { "kind": "fill_color", "r": 255, "g": 0, "b": 0 },
                        { "kind": "rect", "x": 10, "y": 10, "w": 50, "h": 20, "style": "F" },
                        { "kind": "line", "x1": 0, "y1": 0, "x2": 100, "y2": 100 },
                        { "kind": "circle", "x": 50, "y": 50, "radius": 10, "style": "DF" },
                        { "kind": "polygon", "points": [[0, 0], [10, 0], [5, 8]] }
                    ]
                },
                { "width": 612, "height": 792, "shapes": [] }
            ]
        }"#,
    )
    .unwrap();

    let output = run_cli_command(&[
        "render",
        scene_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ])
    .expect("CLI command should succeed");

    assert!(
        output.status.success(),
        "Command should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_pdf_exists_and_valid(&output_path);

    let content = fs::read(&output_path).unwrap();
    assert_eq!(count_occurrences(&content, b"/Type /Page\n"), 2);
    assert_eq!(count_occurrences(&content, b"/Title (Scene Test)"), 1);
    assert_eq!(count_occurrences(&content, b"/MediaBox [0 0 612 792]"), 1);
}

#[test]
fn test_cli_render_missing_scene() {
    let temp_dir = setup_temp_dir();
    let scene_path = temp_dir.path().join("missing.json");
    let output_path = temp_dir.path().join("out.pdf");

    let output = run_cli_command(&[
        "render",
        scene_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ])
    .expect("CLI should run");

    assert!(!output.status.success(), "Command should fail");
    assert!(!output_path.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read scene file"),
        "Should explain the failure: {stderr}"
    );
}

#[test]
fn test_cli_render_malformed_scene() {
    let temp_dir = setup_temp_dir();
    let scene_path = temp_dir.path().join("broken.json");
    let output_path = temp_dir.path().join("out.pdf");
    fs::write(&scene_path, "{ \"pages\": [ { \"shapes\": [ { \"kind\": ").unwrap();

    let output = run_cli_command(&[
        "render",
        scene_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ])
    .expect("CLI should run");

    assert!(!output.status.success(), "Command should fail");
    assert!(!output_path.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid scene file"), "{stderr}");
}

#[test]
fn test_cli_render_scene_without_pages() {
    let temp_dir = setup_temp_dir();
    let scene_path = temp_dir.path().join("empty.json");
    let output_path = temp_dir.path().join("out.pdf");
    fs::write(&scene_path, r#"{ "title": "Nothing", "pages": [] }"#).unwrap();

    let output = run_cli_command(&[
        "render",
        scene_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ])
    .expect("CLI should run");

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no pages"), "{stderr}");
}

#[test]
fn test_cli_render_invalid_page_size_writes_nothing() {
    let temp_dir = setup_temp_dir();
    let scene_path = temp_dir.path().join("zero.json");
    let output_path = temp_dir.path().join("out.pdf");
    fs::write(
        &scene_path,
        r#"{ "pages": [ { "width": 0, "shapes": [
            { "kind": "rect", "x": 0, "y": 0, "w": 10, "h": 10 }
        ] } ] }"#,
    )
    .unwrap();

    let output = run_cli_command(&[
        "render",
        scene_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ])
    .expect("CLI should run");

    assert!(!output.status.success(), "Command should fail");
    assert!(!output_path.exists(), "No partial PDF should be left behind");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid size"), "{stderr}");
}

#[test]
fn test_cli_render_non_ascii_title() {
    let temp_dir = setup_temp_dir();
    let scene_path = temp_dir.path().join("cafe.json");
    let output_path = temp_dir.path().join("cafe.pdf");
    fs::write(&scene_path, r#"{ "title": "Café", "pages": [ {} ] }"#).unwrap();

    let output = run_cli_command(&[
        "render",
        scene_path.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ])
    .expect("CLI should run");

    assert!(output.status.success());
    let content = fs::read(&output_path).unwrap();
    assert_eq!(count_occurrences(&content, b"/Title <FEFF00430061006600E9>"), 1);
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let temp_dir = setup_temp_dir();
    let output_path = temp_dir.path().join("demo.pdf");

    let output = run_cli_command(&["-v", "demo", "-o", output_path.to_str().unwrap()])
        .expect("CLI command should succeed");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PDF saved"), "{stderr}");
    assert!(stderr.contains("DEBUG"), "{stderr}");
}

#[test]
fn test_cli_help() {
    let output = run_cli_command(&["--help"]).expect("CLI should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("demo"));
    assert!(stdout.contains("render"));
}

#[test]
fn test_cli_unknown_command() {
    let output = run_cli_command(&["merge", "a.pdf"]).expect("CLI should run");
    assert!(!output.status.success());
}
