//! Integration tests for the `overthink` CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn overthink() -> Command {
    Command::cargo_bin("overthink").unwrap()
}

// ---------------------------------------------------------------------------
// usage
// ---------------------------------------------------------------------------

#[test]
fn no_question_prints_usage_and_fails() {
    overthink()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn whitespace_question_prints_usage_and_fails() {
    overthink()
        .args(["   ", "  "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

// ---------------------------------------------------------------------------
// local analysis
// ---------------------------------------------------------------------------

#[test]
fn analysis_contains_every_section() {
    overthink()
        .args(["Should", "I", "text", "my", "ex?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Executive Summary")
                .and(predicate::str::contains("Probability Analysis"))
                .and(predicate::str::contains("Visual Breakdown"))
                .and(predicate::str::contains("Emotional Risk Index"))
                .and(predicate::str::contains("Academic Citations"))
                .and(predicate::str::contains("Grand Conclusion"))
                .and(predicate::str::contains("-->")),
        );
}

#[test]
fn unquoted_multi_word_questions_are_joined() {
    overthink()
        .args(["--seed", "4", "is", "it", "too", "late", "to", "start", "coding"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LATE START CODING"));
}

#[test]
fn seed_makes_output_reproducible() {
    let run = || {
        overthink()
            .args(["--seed", "7", "Should I quit my job?"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn different_seeds_vary_the_output() {
    let run = |seed: &str| {
        overthink()
            .args(["--seed", seed, "Should I quit my job?"])
            .output()
            .unwrap()
            .stdout
    };
    assert_ne!(run("1"), run("2"));
}

// ---------------------------------------------------------------------------
// json output
// ---------------------------------------------------------------------------

#[test]
fn json_output_is_a_valid_record() {
    let output = overthink()
        .args(["--json", "--seed", "3", "Should I move?"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let probabilities = record["probabilities"].as_array().unwrap();
    assert!((3..=5).contains(&probabilities.len()));
    let sum: f64 = probabilities
        .iter()
        .map(|p| p["percentage"].as_f64().unwrap())
        .sum();
    assert_eq!((sum * 10.0).round() as i64, 1000);

    let risk = record["risk_index"].as_u64().unwrap();
    assert!(risk <= 100);

    let citations = record["citations"].as_array().unwrap();
    assert!((2..=4).contains(&citations.len()));
}

// ---------------------------------------------------------------------------
// ollama fallback
// ---------------------------------------------------------------------------

#[test]
fn unreachable_thinker_falls_back_to_local_analysis() {
    // Port 9 is the discard service; nothing should be listening.
    overthink()
        .env("OVERTHINK_OLLAMA_HOST", "http://127.0.0.1:9")
        .args(["--thinker", "llama3", "Should I text my ex?"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Falling back to the built-in overthinking engine.")
                .and(predicate::str::contains("Executive Summary"))
                .and(predicate::str::contains("Grand Conclusion")),
        );
}
