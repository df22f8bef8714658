//! E2E тесты для CLI инструмента `yt-chapters`.
//!
//! Фикстуры в `tests/fixtures/`:
//! - `markers_example.txt` — экспорт Premiere (UTF-16LE с BOM, CRLF), длинное видео
//! - `markers_invalid.tsv` — две главы, первая не с нуля
//! - `markers_short.csv` — корректные главы с короткой главой (предупреждение)
//! - `header_only.txt` — только заголовок

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Получить путь к фикстуре.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// Создать команду для запуска yt-chapters.
fn yt_chapters() -> Command {
    Command::new(env!("CARGO_BIN_EXE_yt-chapters"))
}

const EXPECTED_EXAMPLE: &str = "00:00 Why Obsidian\n\
                                07:20 Obsidian Vaults\n\
                                08:09 Knowledge Management features\n\
                                59:04 Base formulas\n\
                                01:00:26 Card Views in Bases\n\
                                01:01:06 Showing/Hiding information in the Cards view\n\
                                02:21:05 Obsidian Starter Kit Systems\n\
                                02:21:40 Obsidian Starter Kit Automated Note Filing";

// ============================================================================
// Успешная конвертация
// ============================================================================

#[test]
fn test_premiere_export_to_stdout() {
    yt_chapters()
        .args(["--input", fixture("markers_example.txt").to_str().unwrap()])
        .assert()
        .success()
        .stdout(EXPECTED_EXAMPLE)
        .stderr(predicate::str::contains("Chapters are valid for YouTube"));
}

#[test]
fn test_output_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("chapters.txt");

    yt_chapters()
        .args([
            "-i",
            fixture("markers_example.txt").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED_EXAMPLE);
}

#[test]
fn test_save_next_to_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("episode.txt");
    fs::copy(fixture("markers_example.txt"), &input).unwrap();

    yt_chapters().args(["-i", input.to_str().unwrap(), "--save"]).assert().success();

    let saved = dir.path().join("episode - YouTube.txt");
    assert_eq!(fs::read_to_string(saved).unwrap(), EXPECTED_EXAMPLE);
}

#[test]
fn test_stdin_input() {
    let content = "Name\tDescription\tIn\n\
                   Intro\t\t00:00:00:00\n\
                   Main\t\t00:01:00:00\n\
                   Outro\t\t00:02:00:00\n";

    yt_chapters()
        .write_stdin(content)
        .assert()
        .success()
        .stdout("00:00 Intro\n01:00 Main\n02:00 Outro");
}

#[test]
fn test_name_first_order() {
    yt_chapters()
        .args(["-i", fixture("markers_example.txt").to_str().unwrap(), "--order", "name-first"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Why Obsidian 00:00\nObsidian Vaults 07:20"));
}

#[test]
fn test_explicit_wrong_encoding_fails() {
    // UTF-16 как UTF-8 — нули и BOM дают некорректный UTF-8
    yt_chapters()
        .args(["-i", fixture("markers_example.txt").to_str().unwrap(), "--encoding", "utf8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read marker export"));
}

// ============================================================================
// Валидация
// ============================================================================

#[test]
fn test_invalid_chapters_still_written_but_fail() {
    yt_chapters()
        .args(["-i", fixture("markers_invalid.tsv").to_str().unwrap()])
        .assert()
        .failure()
        .stdout("00:05 Intro\n00:09 Quick")
        .stderr(predicate::str::contains(
            "error: YouTube requires at least 3 chapters. You have 2 chapters.",
        ))
        .stderr(predicate::str::contains(
            "error: First chapter must start at 00:00:00. Your first chapter starts at 00:05.",
        ))
        .stderr(predicate::str::contains("Validation failed with 2 error(s)"));
}

#[test]
fn test_warnings_pass_unless_strict() {
    let input = fixture("markers_short.csv");

    yt_chapters()
        .args(["-i", input.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: Chapter \"Intro\" is only 5 seconds long"));

    yt_chapters()
        .args(["-i", input.to_str().unwrap(), "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 warning(s) in strict mode"));
}

#[test]
fn test_custom_thresholds() {
    yt_chapters()
        .args([
            "-i",
            fixture("markers_short.csv").to_str().unwrap(),
            "--min-gap",
            "1",
            "--min-chapters",
            "4",
            "--strict",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 4 chapters. You have 3 chapters."))
        .stderr(predicate::str::contains("warning:").not());
}

#[test]
fn test_json_report() {
    yt_chapters()
        .args(["-i", fixture("markers_short.csv").to_str().unwrap(), "--report", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"valid\": true"))
        .stderr(predicate::str::contains("\"warnings\": ["));
}

// ============================================================================
// Ошибки входа
// ============================================================================

#[test]
fn test_header_only_is_an_error() {
    yt_chapters()
        .args(["-i", fixture("header_only.txt").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No chapter markers found in the file"));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("markers.xml");
    fs::write(&input, "Name\tDescription\tIn\n").unwrap();

    yt_chapters()
        .args(["-i", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file type"));
}

#[test]
fn test_missing_input_file() {
    yt_chapters()
        .args(["-i", "/nonexistent/markers.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

#[test]
fn test_save_requires_input() {
    yt_chapters().arg("--save").assert().failure();
}
