use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

const FIXTURE: &str = "tests/fixtures/empire_designs.txt";
const DEFAULT_INPUT: &str = "user_empire_designs_v3.4.txt";

fn run(bin: &str, dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn generator_writes_default_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(FIXTURE, dir.path().join(DEFAULT_INPUT)).unwrap();

    let output = run(env!("CARGO_BIN_EXE_origin_report"), dir.path(), &[], "");
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("4 records parsed, 3 distinct groups found."));
    let report = fs::read_to_string(dir.path().join("origins_report.csv")).unwrap();
    assert!(report.starts_with("N,Origin,Empires\n2,origin_default,KROLL_KEY;UNE_KEY\n"));
}

#[test]
fn prompt_answer_creates_placeholder() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(env!("CARGO_BIN_EXE_portrait_report"), dir.path(), &[], "j\n");
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("Placeholder file"));
    assert!(dir.path().join(DEFAULT_INPUT).exists());
    assert!(!dir.path().join("portraits_report.csv").exists());

    let output = run(env!("CARGO_BIN_EXE_portrait_report"), dir.path(), &[], "");
    assert!(output.status.success(), "{output:?}");
    assert!(dir.path().join("portraits_report.csv").exists());
}

#[test]
fn declined_prompt_runs_on_empty_data() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(env!("CARGO_BIN_EXE_initializer_report"), dir.path(), &[], "n\n");
    assert!(output.status.success(), "{output:?}");
    assert!(stdout(&output).contains("No report written."));
    assert!(!dir.path().join(DEFAULT_INPUT).exists());

    let output = run(env!("CARGO_BIN_EXE_ethics_combinations"), dir.path(), &["--no"], "");
    assert!(output.status.success(), "{output:?}");
    let report = fs::read_to_string(dir.path().join("ethics_combinations_report.csv")).unwrap();
    assert_eq!(report.lines().count(), 1 + 81);
}

#[test]
fn unwritable_output_fails_the_generator() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(FIXTURE, dir.path().join(DEFAULT_INPUT)).unwrap();

    let output = run(
        env!("CARGO_BIN_EXE_origin_report"),
        dir.path(),
        &["-o", "missing_dir/origins.csv"],
        "",
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing_dir"));
}

#[test]
fn config_file_sets_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(FIXTURE, dir.path().join("designs.txt")).unwrap();
    fs::write(
        dir.path().join("empire_reports.toml"),
        "input = \"designs.txt\"\nportraits_output = \"portraits.csv\"\n",
    )
    .unwrap();

    let output = run(env!("CARGO_BIN_EXE_portrait_report"), dir.path(), &[], "");
    assert!(output.status.success(), "{output:?}");
    assert!(dir.path().join("portraits.csv").exists());
}

#[test]
fn empire_ethics_lists_empires() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(FIXTURE, dir.path().join(DEFAULT_INPUT)).unwrap();

    let output = run(env!("CARGO_BIN_EXE_empire_ethics"), dir.path(), &[], "");
    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    assert!(text.contains("Key='UNE_KEY', Ethics=[XIL, EGA, MAT]"));
    assert!(text.contains("Key='UNKNOWN_KEY_EMPIRE_4', Ethics=[PAC, XIL]"));
    assert!(text.contains("Key='SHELL_KEY' skipped"));
    assert!(text.contains("4 of 5 empires listed."));
}

#[test]
fn strip_empty_lines_filters_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        env!("CARGO_BIN_EXE_strip_empty_lines"),
        dir.path(),
        &[],
        "a\n\n   \nb\n",
    );
    assert!(output.status.success(), "{output:?}");
    assert_eq!(stdout(&output), "a\nb\n");
}

#[test]
fn strip_empty_lines_in_place() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("d.txt"), "x\n\ny\n").unwrap();
    let output = run(
        env!("CARGO_BIN_EXE_strip_empty_lines"),
        dir.path(),
        &["d.txt", "d.txt"],
        "",
    );
    assert!(output.status.success(), "{output:?}");
    assert_eq!(fs::read_to_string(dir.path().join("d.txt")).unwrap(), "x\ny\n");
}

#[test]
fn update_reports_runs_every_generator() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(FIXTURE, dir.path().join(DEFAULT_INPUT)).unwrap();

    let output = run(env!("CARGO_BIN_EXE_update_reports"), dir.path(), &[], "");
    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    assert_eq!(text.matches("executed successfully").count(), 4);
    for report in [
        "ethics_combinations_report.csv",
        "origins_report.csv",
        "initializers_report.csv",
        "portraits_report.csv",
    ] {
        assert!(dir.path().join(report).exists(), "{report} missing");
    }
}
