// Copyright 2026 the Boothmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runs the `boothmap` binary end to end.

use std::fs;
use std::process::{Command, Output};

fn boothmap(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_boothmap"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn render_writes_an_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.svg");
    let output = boothmap(&[
        "render",
        "--width",
        "900",
        "--height",
        "600",
        "--booth",
        "1",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("viewBox=\"0 0 900 600\""));
    assert!(svg.contains("<title>TechVenture AI</title>"));
    assert!(svg.contains("matrix(1.5 0 0 1.5 "));
}

#[test]
fn directory_uses_the_config_and_dataset_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("boothmap.toml");
    fs::write(&config, "[pan]\ntarget_scale = 2.0\n").unwrap();
    let dataset = dir.path().join("venue.toml");
    fs::write(
        &dataset,
        r#"
[[booths]]
id = 7
size = "6x6"
zone = "outside-right"

[[exhibitors]]
booth = 7
name = "Corner Coffee"
website = "https://example.com/coffee"
representatives = ["Sam"]

[[positions]]
booth = 7
x = 50.0
y = 50.0
"#,
    )
    .unwrap();

    let output = boothmap(&[
        "--config",
        config.to_str().unwrap(),
        "--dataset",
        dataset.to_str().unwrap(),
        "directory",
        "--search",
        "sam",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("[all (1)] assigned (1) available (0)\n"));
    assert!(text.contains("Vendor Tents\n"));
    assert!(text.contains("Corner Coffee  (Sam)"));

    let output = boothmap(&[
        "--config",
        config.to_str().unwrap(),
        "--dataset",
        dataset.to_str().unwrap(),
        "pan",
        "--booth",
        "7",
    ]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("scale: 2.000000\n"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let output = boothmap(&["--config", missing.to_str().unwrap(), "details"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read config"));
}

#[test]
fn details_without_a_booth_shows_the_prompt() {
    let output = boothmap(&["details"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Select a booth to view details\n");
}
