#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "text,category,is_porn,is_offensive\n";

/// Create an isolated working directory with fixture CSVs under `data/tagging/`.
///
/// The CLI's default paths are relative to the working directory, so running
/// `cli_in(&tmp)` picks these up and writes `docs/intercoder_reliability.md` inside `tmp`.
pub fn setup_data(fixtures: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let data_dir = data_dir(&tmp);
    std::fs::create_dir_all(&data_dir).unwrap();

    for fixture in fixtures {
        let src = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures/tagging")
            .join(fixture);
        std::fs::copy(&src, data_dir.join(fixture)).unwrap();
    }

    tmp
}

pub fn data_dir(tmp: &TempDir) -> PathBuf {
    tmp.path().join("data").join("tagging")
}

pub fn default_report(tmp: &TempDir) -> PathBuf {
    tmp.path().join("docs").join("intercoder_reliability.md")
}

/// Write a session CSV from (text, category) rows with both flags false.
pub fn write_session(dir: &Path, name: &str, rows: &[(&str, &str)]) {
    let mut body = HEADER.to_string();
    for (text, category) in rows {
        body.push_str(&format!("{},{},False,False\n", text, category));
    }
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(name), body).unwrap();
}

/// CLI command running inside `tmp`, with HOME pointed there too.
#[allow(deprecated)]
pub fn cli_in(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("intercoder-reliability").unwrap();
    cmd.current_dir(tmp.path());
    cmd.env("HOME", tmp.path());
    cmd.env_remove("RUST_LOG");
    cmd
}
