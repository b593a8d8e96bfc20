#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wf() -> Command {
    cargo_bin_cmd!("weekfill")
}

/// Write a JSON fixture into the system temp dir and return its path
pub fn write_fixture(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weekfill.json", name));
    fs::write(&path, json).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path and ensure it does not exist yet
pub fn temp_out(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weekfill_out.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
