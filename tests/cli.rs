//! Behavior of the `dnatrie` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn dnatrie() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dnatrie"))
}

#[test]
fn prints_matching_offsets() {
    dnatrie()
        .write_stdin("AATG\n2\nAT\nAG\n")
        .assert()
        .success()
        .stdout("1 \n");
}

#[test]
fn every_position() {
    dnatrie()
        .write_stdin("AAAA 1 A")
        .assert()
        .success()
        .stdout("0 1 2 3 \n");
}

#[test]
fn no_match_prints_nothing() {
    dnatrie()
        .write_stdin("ACGT 0")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn shorter_pattern_is_reported() {
    dnatrie()
        .write_stdin("AC 2 AC A")
        .assert()
        .success()
        .stdout("0 \n");
}

#[test]
fn bad_text_symbol_fails() {
    dnatrie()
        .write_stdin("AXTG 2 AT AG")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid nucleotide 'X'"));
}

#[test]
fn missing_patterns_fail() {
    dnatrie()
        .write_stdin("ACGT 3 A")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3 patterns, found 1"));
}

#[test]
fn reads_problem_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "CATTCAG\n3\nCAT CAG TT").unwrap();
    dnatrie()
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout("0 2 4 \n");
}

#[test]
fn patterns_from_file() {
    let mut patterns = NamedTempFile::new().unwrap();
    writeln!(patterns, "# adapters\nAT\nAG").unwrap();
    dnatrie()
        .arg("-p")
        .arg(patterns.path())
        .write_stdin("AATG\n")
        .assert()
        .success()
        .stdout("1 \n");
}

#[test]
fn dump_trie_goes_to_stderr() {
    dnatrie()
        .args(["--dump-trie", "post"])
        .write_stdin("AATG 2 AT AG")
        .assert()
        .success()
        .stdout("1 \n")
        .stderr(predicate::str::contains("1->3:G\n1->2:T\n0->1:A\n"));
}

#[test]
fn pre_order_dump() {
    dnatrie()
        .args(["--dump-trie", "pre"])
        .write_stdin("AATG 3 AT AG C")
        .assert()
        .success()
        .stdout("1 \n")
        .stderr(predicate::str::contains("0->1:A\n1->3:G\n1->2:T\n0->4:C\n"));
}

#[test]
fn verbose_logs_construction() {
    dnatrie()
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .write_stdin("AATG 2 AT AG")
        .assert()
        .success()
        .stdout("1 \n")
        .stderr(predicate::str::contains("built pattern trie"));
}

#[test]
fn quiet_by_default() {
    dnatrie()
        .env_remove("RUST_LOG")
        .write_stdin("AATG 2 AT AG")
        .assert()
        .success()
        .stderr("");
}

#[test]
fn huge_pattern_count_is_an_error() {
    dnatrie()
        .write_stdin("ACGT 18446744073709551615 A")
        .assert()
        .failure()
        .stderr(predicate::str::contains("found 1"));
}

#[test]
fn unknown_dump_order_is_rejected() {
    dnatrie()
        .args(["--dump-trie", "inorder"])
        .write_stdin("AATG 2 AT AG")
        .assert()
        .failure();
}
