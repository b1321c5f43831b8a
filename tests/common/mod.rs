#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn bundled_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("cheatsheets")
}

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub decls: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let decls = root.join("cheatsheets");
        fs::create_dir_all(&decls).expect("create declaration dir");
        Self {
            _tmp: tmp,
            root,
            decls,
        }
    }

    /// A workspace pre-filled with copies of the bundled declarations.
    pub fn with_bundled() -> Self {
        let env = Self::new();
        for entry in fs::read_dir(bundled_dir()).expect("list bundled declarations") {
            let path = entry.expect("dir entry").path();
            fs::copy(&path, env.decls.join(path.file_name().expect("file name")))
                .expect("copy declaration");
        }
        env
    }

    pub fn write(&self, file: &str, body: &str) -> PathBuf {
        let p = self.decls.join(file);
        fs::write(&p, body).expect("write declaration");
        p
    }

    /// The binary with a clean log filter and no `--dir`.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("cheatsheets");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--dir")
            .arg(self.decls.to_str().expect("decl path utf8"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn declaration(keyword: &str, file_name: &str) -> String {
    format!(
        r#"title = 'Fixture {keyword}'
docset_file_name = '{file_name}'
keyword = '{keyword}'
introduction = 'Fixture cheatsheet.'
source_url = 'https://example.com/{file_name}'
notes = """
Fixture notes.
"""

[[category]]
id = 'Fixture'

[[category.entry]]
command = '<C-a>'
name = 'First fixture entry.'

[[category.entry]]
command = '<C-b>'
name = 'Second fixture entry.'
notes = 'Has notes.'
"#
    )
}

pub fn assert_is_file(p: &Path) {
    assert!(p.is_file(), "expected file at {}", p.display());
}
