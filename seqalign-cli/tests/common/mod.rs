#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Nucleotide scores favouring transitions (A<->G, C<->T)
pub const TRANSITION_TABLE: &str = "\
# columns: sequence A symbol, rows: sequence B symbol
*  A  C  G  T
A  5 -4  1 -4
C -4  5 -4  1
G  1 -4  5 -4
T -4  1 -4  5
";

/// Helper to run the seqalign binary with no ambient configuration
pub fn seqalign_cmd() -> Command {
    let mut cmd = Command::cargo_bin("seqalign").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("SEQALIGN_LOG")
        .env("SEQALIGN_HOME", std::env::temp_dir().join("seqalign-test-no-home"));
    cmd
}

/// Isolated SEQALIGN_HOME with room for config and table files
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `config.toml` into the home directory, where it is picked up by default
    pub fn write_home_config(&self, content: &str) -> Result<PathBuf> {
        self.write_file("config.toml", content)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = seqalign_cmd();
        cmd.env("SEQALIGN_HOME", self.temp_dir.path());
        cmd
    }
}
