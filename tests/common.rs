#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn lif() -> Command {
    cargo_bin_cmd!("lifreport")
}

/// Create an empty scratch directory inside the system temp dir, wiping any leftover
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lifreport", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// First line with 11 comma-separated fields and the given time in the 11th
pub fn lif_line(tag: &str, time: &str) -> String {
    format!("{tag},B,C,D,e,f,g,h,i,j,{time},trailing")
}

pub fn write_lif(dir: &Path, file: &str, first_line: &str) {
    let content = format!("{first_line}\nsecond line is ignored,1,2,3\n");
    fs::write(dir.join(file), content).expect("write lif file");
}

pub fn read_output(dir: &Path) -> String {
    fs::read_to_string(dir.join("output.csv")).expect("read output.csv")
}
