use assert_cmd::Command;
use flate2::bufread::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a `chriple` command that runs in an isolated temp
/// directory (default dictionary paths resolve inside it).
fn chriple_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chriple").unwrap();
    cmd.current_dir(work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a gzip-compressed corpus file with the given lines.
fn write_corpus(path: &Path, lines: &[&str]) {
    let mut gz = GzEncoder::new(
        std::fs::File::create(path).unwrap(),
        Compression::default(),
    );
    for line in lines {
        writeln!(gz, "{line}").unwrap();
    }
    gz.finish().unwrap();
}

/// Decompress a gzip file to a string.
fn read_gzip(path: &Path) -> String {
    let file = std::io::BufReader::new(std::fs::File::open(path).unwrap());
    let mut text = String::new();
    MultiGzDecoder::new(file)
        .read_to_string(&mut text)
        .unwrap();
    text
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn version_flag() {
    Command::cargo_bin("chriple")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chriple"));
}

#[test]
fn help_flag() {
    Command::cargo_bin("chriple")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dictionary-encode RDF triple dumps"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("encode"));
}

#[test]
fn verbose_quiet_conflict() {
    let tmp = TempDir::new().unwrap();
    chriple_cmd(&tmp)
        .args(["--verbose", "--quiet", "build", "corpus.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// Golden path: build then encode
// ============================================================================

#[test]
fn build_then_encode_round_trip() {
    let tmp = TempDir::new().unwrap();
    let corpus = tmp.path().join("corpus.gz");
    write_corpus(
        &corpus,
        &[
            "Paris\tcapitalOf\tFrance\t.",
            "Berlin\tcapitalOf\tGermany\t.",
        ],
    );

    // Build: ids in stream order — Paris=1, France=2, Berlin=3, Germany=4;
    // capitalOf=1.
    chriple_cmd(&tmp)
        .args(["build", "corpus.gz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 nouns, 1 predicates"));

    assert!(tmp.path().join("nouns.dict").exists());
    assert!(tmp.path().join("predicates.dict").exists());

    // Encode to stdout
    chriple_cmd(&tmp)
        .args(["encode", "corpus.gz"])
        .assert()
        .success()
        .stdout("1 1 2\n3 1 4\n")
        .stderr(predicate::str::contains("2 triples encoded"));
}

#[test]
fn encode_to_gzip_file() {
    let tmp = TempDir::new().unwrap();
    let corpus = tmp.path().join("corpus.gz");
    write_corpus(&corpus, &["Paris\tcapitalOf\tFrance\t."]);

    chriple_cmd(&tmp)
        .args(["build", "corpus.gz"])
        .assert()
        .success();

    chriple_cmd(&tmp)
        .args(["encode", "corpus.gz", "-o", "out.gz"])
        .assert()
        .success();

    assert_eq!(read_gzip(&tmp.path().join("out.gz")), "1 1 2\n");
}

#[test]
fn unknown_key_encodes_as_zero() {
    let tmp = TempDir::new().unwrap();
    write_corpus(
        &tmp.path().join("corpus.gz"),
        &["Paris\tcapitalOf\tFrance\t."],
    );
    write_corpus(
        &tmp.path().join("other.gz"),
        &["Unknown_City\tcapitalOf\tFrance\t."],
    );

    chriple_cmd(&tmp)
        .args(["build", "corpus.gz"])
        .assert()
        .success();

    // Miss propagates into the output, it does not abort the run
    chriple_cmd(&tmp)
        .args(["encode", "other.gz"])
        .assert()
        .success()
        .stdout("0 1 2\n");
}

#[test]
fn space_delimited_legacy_format() {
    let tmp = TempDir::new().unwrap();
    write_corpus(
        &tmp.path().join("corpus.gz"),
        &["Paris capitalOf France ."],
    );

    chriple_cmd(&tmp)
        .args(["build", "corpus.gz", "--delimiter", "space"])
        .assert()
        .success();

    chriple_cmd(&tmp)
        .args(["encode", "corpus.gz", "--delimiter", "space"])
        .assert()
        .success()
        .stdout("1 1 2\n");
}

// ============================================================================
// Malformed-line policy
// ============================================================================

#[test]
fn malformed_line_aborts_by_default() {
    let tmp = TempDir::new().unwrap();
    write_corpus(
        &tmp.path().join("corpus.gz"),
        &["Paris\tcapitalOf\tFrance", "only\ttwo"],
    );

    chriple_cmd(&tmp)
        .args(["build", "corpus.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed line 2"));
}

#[test]
fn malformed_line_skipped_under_skip_policy() {
    let tmp = TempDir::new().unwrap();
    write_corpus(
        &tmp.path().join("corpus.gz"),
        &["Paris\tcapitalOf\tFrance", "only\ttwo", "Paris\tcapitalOf\tFrance"],
    );

    chriple_cmd(&tmp)
        .args(["build", "corpus.gz", "--on-malformed", "skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 lines skipped"));

    chriple_cmd(&tmp)
        .args(["encode", "corpus.gz", "--on-malformed", "skip"])
        .assert()
        .success()
        .stdout("1 1 2\n1 1 2\n")
        .stderr(predicate::str::contains("1 lines skipped"));
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn encode_without_dictionaries_fails_before_output() {
    let tmp = TempDir::new().unwrap();
    write_corpus(
        &tmp.path().join("corpus.gz"),
        &["Paris\tcapitalOf\tFrance\t."],
    );

    chriple_cmd(&tmp)
        .args(["encode", "corpus.gz"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("dictionary nouns.dict unavailable"));
}

#[test]
fn build_refuses_to_overwrite_existing_store() {
    let tmp = TempDir::new().unwrap();
    write_corpus(
        &tmp.path().join("corpus.gz"),
        &["Paris\tcapitalOf\tFrance\t."],
    );

    chriple_cmd(&tmp)
        .args(["build", "corpus.gz"])
        .assert()
        .success();

    chriple_cmd(&tmp)
        .args(["build", "corpus.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    chriple_cmd(&tmp)
        .args(["build", "corpus.gz", "--force"])
        .assert()
        .success();
}

#[test]
fn failed_force_build_preserves_existing_dictionaries() {
    let tmp = TempDir::new().unwrap();
    write_corpus(
        &tmp.path().join("corpus.gz"),
        &["Paris\tcapitalOf\tFrance\t."],
    );

    chriple_cmd(&tmp)
        .args(["build", "corpus.gz"])
        .assert()
        .success();

    let nouns_before = std::fs::read(tmp.path().join("nouns.dict")).unwrap();
    let predicates_before = std::fs::read(tmp.path().join("predicates.dict")).unwrap();

    // Typo'd input: the forced rebuild fails before replacing anything
    chriple_cmd(&tmp)
        .args(["build", "nope.gz", "--force"])
        .assert()
        .failure();

    assert_eq!(
        std::fs::read(tmp.path().join("nouns.dict")).unwrap(),
        nouns_before
    );
    assert_eq!(
        std::fs::read(tmp.path().join("predicates.dict")).unwrap(),
        predicates_before
    );

    // The existing stores are still usable
    chriple_cmd(&tmp)
        .args(["encode", "corpus.gz"])
        .assert()
        .success()
        .stdout("1 1 2\n");
}

#[test]
fn quiet_build_suppresses_summary() {
    let tmp = TempDir::new().unwrap();
    write_corpus(
        &tmp.path().join("corpus.gz"),
        &["Paris\tcapitalOf\tFrance\t."],
    );

    chriple_cmd(&tmp)
        .args(["--quiet", "build", "corpus.gz"])
        .assert()
        .success()
        .stdout("");

    assert!(tmp.path().join("nouns.dict").exists());
    assert!(tmp.path().join("predicates.dict").exists());
}

#[test]
fn build_missing_input_fails() {
    let tmp = TempDir::new().unwrap();
    chriple_cmd(&tmp)
        .args(["build", "nope.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn corrupt_dictionary_fails_to_open() {
    let tmp = TempDir::new().unwrap();
    write_corpus(
        &tmp.path().join("corpus.gz"),
        &["Paris\tcapitalOf\tFrance\t."],
    );
    std::fs::write(tmp.path().join("nouns.dict"), b"not a dictionary").unwrap();
    std::fs::write(tmp.path().join("predicates.dict"), b"not a dictionary").unwrap();

    chriple_cmd(&tmp)
        .args(["encode", "corpus.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid magic"));
}
