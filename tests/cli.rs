//! Integration tests for top-level CLI behavior.

use std::process::Command;

use mockito::Server;

fn run_client(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_cmdsrv-client");
    Command::new(bin).args(args).output().expect("failed to run cmdsrv-client binary")
}

#[test]
fn exec_prints_response_json_on_stdout() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/cmd")
        .with_status(200)
        .with_body(r#"{"cmd": ["echo", "hi"], "retval": 0, "stderr": "", "stdout": "hi\n"}"#)
        .create();

    let endpoint = format!("{}/cmd", server.url());
    let output = run_client(&["exec", &endpoint, r#"{"cmd":["echo","hi"]}"#]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains(r#""retval":0"#));
    assert!(stdout.contains(r#""stdout":"hi\n""#));
}

#[test]
fn exec_with_malformed_request_exits_with_error() {
    let output = run_client(&["exec", "http://127.0.0.1:1/cmd", "{}"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("malformed payload"));
}

#[test]
fn exec_against_rejecting_server_exits_with_error() {
    let mut server = Server::new();
    let _mock = server.mock("POST", "/cmd").with_status(403).with_body("denied").create();

    let endpoint = format!("{}/cmd", server.url());
    let output = run_client(&["exec", &endpoint, r#"{"cmd":["ls"]}"#]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("403"));
}

#[test]
fn exec_help_shows_usage() {
    let output = run_client(&["exec", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("ENDPOINT"));
    assert!(stdout.contains("REQUEST"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_client(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
