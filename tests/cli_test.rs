use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nbslides"))
        .args(args)
        .env_remove("NBSLIDES_THEME")
        .output()
        .expect("Failed to execute command")
}

fn write_sample_notebook(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("sample.ipynb");
    let notebook = r##"{
      "nbformat": 4,
      "nbformat_minor": 5,
      "metadata": {},
      "cells": [
        {"cell_type": "markdown", "metadata": {}, "source": "# Sample\n## Subtitle"},
        {"cell_type": "code", "metadata": {}, "outputs": [], "execution_count": null,
         "source": "total = 0\nfor n in range(3):\n    total += n\n#%title=Sum highlights=2-3"}
      ]
    }"##;
    fs::write(&path, notebook).expect("Failed to write notebook");
    path
}

#[test]
fn test_convert_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_sample_notebook(temp_dir.path());
    let output_path = temp_dir.path().join("sample.pptx");

    let output = run_command(&[
        "convert",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
        "--aspect-ratio",
        "16:9",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(output_path.exists(), "PPTX file was not created");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("3 slides"), "unexpected output: {}", stdout);
}

#[test]
fn test_outline_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_sample_notebook(temp_dir.path());

    let output = run_command(&["outline", "-i", input.to_str().unwrap()]);
    assert!(output.status.success(), "Command failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "  1. title: Sample / Subtitle",
            "  2. code: Sum (3 lines, highlight 1)",
            "  3. code: Sum (3 lines, highlight 2,3)",
        ]
    );
}

#[test]
fn test_themes_command() {
    let output = run_command(&["themes"]);
    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("InspiredGitHub"));
}

#[test]
fn test_convert_missing_input_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_path = temp_dir.path().join("never.pptx");

    let output = run_command(&[
        "convert",
        "-i",
        temp_dir.path().join("missing.ipynb").to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Path not found"));
    assert!(!output_path.exists());
}
