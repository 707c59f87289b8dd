#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Three rows: a normal range, a midnight rollover and a non-range lead field.
pub const SAMPLE: &str = "09:00-10:30,こんにちは世界,extra\n23:30-00:15,テロップ,x\nnote,メモ\n";

pub const SAMPLE_CSV: &str = "経過時間,区間,テロップ内容,文字数,文字数/秒\n\
90,09:00-10:30,こんにちは世界,7,0.077778\n\
45,23:30-00:15,テロップ,4,0.088889\n\
,note,メモ,2,";

pub fn tcsv() -> Command {
    cargo_bin_cmd!("telopcsv")
}

/// Command with an isolated (not yet existing) config file and no colors.
pub fn tcsv_in(dir: &Path) -> Command {
    let mut cmd = tcsv();
    cmd.args(["--no-color", "--config", &config_path(dir)]);
    cmd
}

pub fn workspace() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub fn config_path(dir: &Path) -> String {
    dir.join("telopcsv.conf").to_string_lossy().to_string()
}

pub fn write_input(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("write input");
    path.to_string_lossy().to_string()
}

/// Create (and return) an empty output directory inside `dir`.
pub fn out_dir(dir: &Path) -> PathBuf {
    let out = dir.join("out");
    fs::create_dir_all(&out).expect("create out dir");
    out
}

pub fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}
