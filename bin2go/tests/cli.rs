#![allow(unused_crate_dependencies)]
use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn bin2go() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_bin2go"));
    command.arg("--color=false");
    command
}

#[test]
fn writes_per_file_output() {
    let dir = TempDir::new().expect("can create temp dir");
    fs::write(dir.path().join("icon.png"), [0x89, b'P', b'N', b'G']).expect("can write input");

    let status = bin2go()
        .current_dir(dir.path())
        .args(["-c", "icon.png"])
        .status()
        .expect("binary runs");
    assert!(status.success(), "exit status: {status}");

    let out = fs::read_to_string(dir.path().join("icon.png.go")).expect("output exists");
    assert_eq!(
        out,
        "// Code generated by bin2go; DO NOT EDIT.\n\
         package main\n\
         \n\
         var iconPng = [...]byte{\n\
         \t0x89, 0x50, 0x4e, 0x47,\t// _PNG\n\
         }\n"
    );
}

#[test]
fn single_output_with_explicit_name() {
    let dir = TempDir::new().expect("can create temp dir");
    fs::write(dir.path().join("data.bin"), [0, 255]).expect("can write input");

    let status = bin2go()
        .current_dir(dir.path())
        .args(["-p", "assets", "-z", "-s", "assets.go", "-n", "blob", "data.bin"])
        .status()
        .expect("binary runs");
    assert!(status.success(), "exit status: {status}");

    let out = fs::read_to_string(dir.path().join("assets.go")).expect("output exists");
    assert!(out.contains("package assets\n"), "got {out:?}");
    assert!(out.ends_with("\nvar blob = []byte{\n\t0x00, 0xff,\n}\n"), "got {out:?}");
}

#[test]
fn fails_on_missing_input() {
    let dir = TempDir::new().expect("can create temp dir");

    let output = bin2go()
        .current_dir(dir.path())
        .arg("missing.bin")
        .output()
        .expect("binary runs");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.bin"), "got {stderr:?}");
}

#[test]
fn fails_on_nameless_input() {
    let dir = TempDir::new().expect("can create temp dir");
    fs::write(dir.path().join("_.-"), [1]).expect("can write input");

    let status = bin2go()
        .current_dir(dir.path())
        .arg("_.-")
        .status()
        .expect("binary runs");

    assert!(!status.success());
    assert!(!dir.path().join("_.-.go").exists());
}

#[test]
fn refuses_to_overwrite_inputs() {
    let dir = TempDir::new().expect("can create temp dir");
    fs::write(dir.path().join("x"), [1]).expect("can write input");
    fs::write(dir.path().join("x.go"), "package precious\n").expect("can write input");

    let status = bin2go()
        .current_dir(dir.path())
        .args(["x", "x.go"])
        .status()
        .expect("binary runs");

    assert!(!status.success());
    let kept = fs::read_to_string(dir.path().join("x.go")).expect("input still exists");
    assert_eq!(kept, "package precious\n");
}
