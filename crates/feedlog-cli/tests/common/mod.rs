use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn command(args: &[&str], data_file: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_feedlog"));
    cmd.args(args);
    cmd.arg("--data-file").arg(data_file);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("FEEDLOG_DATA_FILE");
    cmd
}

/// Run the CLI against an isolated record file.
pub fn run_cli(args: &[&str], data_file: &Path) -> Output {
    command(args, data_file)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(args: &[&str], data_file: &Path) -> String {
    let output = run_cli(args, data_file);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI with `input` piped to stdin.
pub fn run_cli_with_input(args: &[&str], data_file: &Path, input: &str) -> Output {
    let mut child = command(args, data_file)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .as_mut()
        .expect("Failed to open stdin")
        .write_all(input.as_bytes())
        .expect("Failed to write to stdin");

    child.wait_with_output().expect("Failed to wait for CLI")
}

/// Add a record and return its id as printed on stdout.
pub fn add_record(data_file: &Path, extra: &[&str]) -> String {
    let mut args = vec!["add"];
    args.extend_from_slice(extra);
    let stdout = run_cli_success(&args, data_file);
    stdout
        .lines()
        .next()
        .expect("No id printed")
        .trim()
        .to_string()
}

/// Count JSON record lines from `list --json`.
pub fn record_count(data_file: &Path) -> usize {
    run_cli_success(&["list", "--json"], data_file)
        .lines()
        .filter(|l| l.starts_with('{'))
        .count()
}
