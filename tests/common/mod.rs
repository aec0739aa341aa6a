#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn cmd() -> Command {
    cargo_bin_cmd!("shape-area")
}

pub fn run_stdin(input: &str) -> String {
    let out = cmd()
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(out).expect("utf8 stdout")
}

pub fn run_json(input: &str) -> Value {
    let out = cmd()
        .arg("--json")
        .write_stdin(input)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

pub struct InputFile {
    _tmp: TempDir,
    pub path: PathBuf,
}

impl InputFile {
    pub fn new(contents: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join("queries.txt");
        fs::write(&path, contents).expect("write query file");
        Self { _tmp: tmp, path }
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("query path utf8")
    }
}
