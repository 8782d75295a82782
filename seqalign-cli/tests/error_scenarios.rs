mod common;

use anyhow::Result;
use predicates::prelude::*;

use common::*;

#[test]
fn test_gap_symbol_in_sequence() {
    let mut cmd = seqalign_cmd();
    cmd.args(["align", "AC-G", "ACG"]);

    cmd.assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("position 2"))
        .stderr(predicate::str::contains("sequence A"));
}

#[test]
fn test_translate_without_start_codon() {
    let mut cmd = seqalign_cmd();
    cmd.args(["translate", "GGCUAA"]);

    cmd.assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("no start codon"));
}

#[test]
fn test_translate_invalid_nucleotide() {
    let mut cmd = seqalign_cmd();
    cmd.args(["translate", "AUGZ"]);

    cmd.assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("'Z'"));
}

#[test]
fn test_missing_table_file() {
    let mut cmd = seqalign_cmd();
    cmd.args(["align", "AC", "AG", "--table", "/nonexistent/scores.txt"]);

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("/nonexistent/scores.txt"));
}

#[test]
fn test_malformed_table_file() -> Result<()> {
    let env = TestEnvironment::new()?;
    let table = env.write_file("bad.txt", "  A C\nA 1 2\nC 1\n")?;

    let mut cmd = env.cmd();
    cmd.args(["align", "AC", "AG", "--table"]).arg(&table);

    cmd.assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("line 3"));
    Ok(())
}

#[test]
fn test_malformed_config() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.write_home_config("[scoring]\nmatch = \"high\"\n")?;

    let mut cmd = env.cmd();
    cmd.args(["align", "AC", "AG"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn test_missing_explicit_config() {
    let mut cmd = seqalign_cmd();
    cmd.args(["--config", "/nonexistent/config.toml", "align", "AC", "AG"]);

    cmd.assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("/nonexistent/config.toml"));
}

#[test]
fn test_unknown_mode_is_usage_error() {
    let mut cmd = seqalign_cmd();
    cmd.args(["align", "AC", "AG", "-m", "alignment:semi"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("alignment:global"));
}

#[test]
fn test_overflowing_scores_are_a_configuration_error() {
    let mut cmd = seqalign_cmd();
    cmd.args(["align", "AA", "AA", "-m", "similarity", "--match", "2000000000"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("score overflow"));
}
