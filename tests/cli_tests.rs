//! End-to-end tests for the motif-mark binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FASTA: &str = ">gene1 chr1:100-110\naaaTGCTaaa\n>gene2\nccgcTGCATGcgc\n";

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn motif_mark() -> Command {
    Command::cargo_bin("motif-mark").expect("binary built")
}

#[test]
fn test_render_writes_svg_next_to_input() {
    let dir = TempDir::new().unwrap();
    let fasta = write(dir.path(), "Figure_1.fasta", FASTA);
    let motifs = write(dir.path(), "motifs.txt", "ygcy\nGCAUG\n");

    motif_mark()
        .arg("render")
        .arg("-f")
        .arg(&fasta)
        .arg("-m")
        .arg(&motifs)
        .assert()
        .success()
        .stdout(predicate::str::contains("Figure_1.svg"));

    let svg = fs::read_to_string(dir.path().join("Figure_1.svg")).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("gene1 chr1:100-110"));
    assert!(svg.contains("YGCY"));
    assert!(svg.contains("GCAUG"));
}

#[test]
fn test_render_multiple_files_to_output_dir() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a.fa", FASTA);
    let b = write(dir.path(), "b.fasta", ">x\nttYGCYtt\n");
    let motifs = write(dir.path(), "motifs.txt", "YGCY\n");
    let out = dir.path().join("plots");

    motif_mark()
        .args(["render", "--output-dir"])
        .arg(&out)
        .arg("-f")
        .arg(&a)
        .arg("-f")
        .arg(&b)
        .arg("-m")
        .arg(&motifs)
        .args(["-c", "dark2"])
        .assert()
        .success();

    assert!(out.join("a.svg").exists());
    assert!(out.join("b.svg").exists());
}

#[test]
fn test_render_refuses_inputs_sharing_an_output() {
    let dir = TempDir::new().unwrap();
    let a = write(dir.path(), "a.fa", FASTA);
    let b = write(dir.path(), "a.fasta", ">x\nttYGCYtt\n");
    let motifs = write(dir.path(), "motifs.txt", "YGCY\n");

    motif_mark()
        .arg("render")
        .arg("-f")
        .arg(&a)
        .arg("-f")
        .arg(&b)
        .arg("-m")
        .arg(&motifs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("a.svg"));

    assert!(!dir.path().join("a.svg").exists());
}

#[test]
fn test_render_json_summary() {
    let dir = TempDir::new().unwrap();
    let fasta = write(dir.path(), "genes.fa", FASTA);
    let motifs = write(dir.path(), "motifs.txt", "YGCY\n");

    let output = motif_mark()
        .args(["--format", "json", "render", "-f"])
        .arg(&fasta)
        .arg("-m")
        .arg(&motifs)
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary[0]["records"], 2);
    assert_eq!(summary[0]["hits"], 2);
}

#[test]
fn test_bad_motif_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let fasta = write(dir.path(), "Figure_1.fasta", FASTA);
    let motifs = write(dir.path(), "motifs.txt", "YGCY\nygxy\n");

    motif_mark()
        .arg("render")
        .arg("-f")
        .arg(&fasta)
        .arg("-m")
        .arg(&motifs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("YGXY"))
        .stderr(predicate::str::contains("'X'"));

    assert!(!dir.path().join("Figure_1.svg").exists());
}

#[test]
fn test_unknown_palette_fails() {
    let dir = TempDir::new().unwrap();
    let fasta = write(dir.path(), "g.fasta", FASTA);
    let motifs = write(dir.path(), "motifs.txt", "YGCY\n");

    motif_mark()
        .arg("render")
        .arg("-f")
        .arg(&fasta)
        .arg("-m")
        .arg(&motifs)
        .args(["-c", "rainbow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rainbow"));
}

#[test]
fn test_record_without_feature_fails() {
    let dir = TempDir::new().unwrap();
    let fasta = write(dir.path(), "g.fasta", ">lower\nacgtacgt\n");
    let motifs = write(dir.path(), "motifs.txt", "YGCY\n");

    motif_mark()
        .arg("render")
        .arg("-f")
        .arg(&fasta)
        .arg("-m")
        .arg(&motifs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("lower"));
}

#[test]
fn test_locate_tsv_reports_offsets_and_rows() {
    let dir = TempDir::new().unwrap();
    let fasta = write(dir.path(), "g.fasta", ">gene1\naaaTGCTaaa\n");
    let motifs = write(dir.path(), "motifs.txt", "YGCY\nGCT\n");

    motif_mark()
        .args(["--format", "tsv", "locate", "-f"])
        .arg(&fasta)
        .arg("-m")
        .arg(&motifs)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "file\trecord\talphabet\tmotif\tstart\tend\trow",
        ))
        .stdout(predicate::str::contains("gene1\tDNA\tYGCY\t3\t7\t0"))
        .stdout(predicate::str::contains("gene1\tDNA\tGCT\t4\t7\t1"));
}

#[test]
fn test_locate_uses_rna_variants() {
    let dir = TempDir::new().unwrap();
    let fasta = write(dir.path(), "r.fasta", ">rna1\nuuuUGCAUGuuu\n");
    let motifs = write(dir.path(), "motifs.txt", "ugcaug\n");

    motif_mark()
        .args(["--format", "tsv", "locate", "-f"])
        .arg(&fasta)
        .arg("-m")
        .arg(&motifs)
        .assert()
        .success()
        .stdout(predicate::str::contains("rna1\tRNA\tUGCAUG\t3\t9\t0"));
}

#[test]
fn test_locate_text_lists_motifs_without_hits() {
    let dir = TempDir::new().unwrap();
    let fasta = write(dir.path(), "g.fasta", ">gene1\naaaTGCTaaa\n");
    let motifs = write(dir.path(), "motifs.txt", "YGCY\nCATAG\n");

    motif_mark()
        .arg("locate")
        .arg("-f")
        .arg(&fasta)
        .arg("-m")
        .arg(&motifs)
        .assert()
        .success()
        .stdout(predicate::str::contains("gene1 (DNA"))
        .stdout(predicate::str::contains("CATAG"))
        .stdout(predicate::str::contains("no hits"));
}

#[test]
fn test_expand_lists_variants() {
    let dir = TempDir::new().unwrap();
    let motifs = write(dir.path(), "motifs.txt", "YGCY\n");

    motif_mark()
        .arg("expand")
        .arg("-m")
        .arg(&motifs)
        .assert()
        .success()
        .stdout(predicate::str::contains("YGCY (4 variants)"))
        .stdout(predicate::str::contains("CGCC, CGCT, TGCC, TGCT"))
        .stdout(predicate::str::contains("UGCU"));
}

#[test]
fn test_expand_json_single_alphabet() {
    let dir = TempDir::new().unwrap();
    let motifs = write(dir.path(), "motifs.txt", "AN\n");

    let output = motif_mark()
        .args(["--format", "json", "expand", "--alphabet", "rna", "-m"])
        .arg(&motifs)
        .output()
        .unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing[0]["motif"], "AN");
    assert_eq!(listing[0]["variant_count"], 4);
    assert_eq!(listing[0]["rna"].as_array().map(Vec::len), Some(4));
    assert!(listing[0].get("dna").is_none());
}

#[test]
fn test_missing_required_args() {
    motif_mark().arg("render").assert().failure();
}
