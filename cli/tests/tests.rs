use std::process::{Command, Output};

const TOKEN_ADDRESS: &str = "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913";
const HOLDER_ADDRESS: &str = "0x0007a881cd95b1484fca47615b64803dad620c8d";
// Nothing listens here, so every read fails.
const UNREACHABLE_RPC_URL: &str = "http://127.0.0.1:1";

fn tokengate(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tokengate"))
        .args(args)
        .env_remove("RPC_URL")
        .env_remove("TOKEN_GATE_RPC_URL")
        .env_remove("TOKEN_GATE_TOKEN_ADDRESS")
        .env_remove("TOKEN_GATE_MIN_BALANCE")
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("tokengate failed: {stderr}");
    }
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn format_units() {
    let output = tokengate(&["format-units", "2500000000000000000"]);
    assert_eq!("2.5", stdout(&output).trim());

    let output = tokengate(&["format-units", "500000", "--decimals", "6"]);
    assert_eq!("0.5", stdout(&output).trim());

    let output = tokengate(&["format-units", "42", "--decimals", "0"]);
    assert_eq!("42", stdout(&output).trim());
}

#[test]
fn parse_units() {
    let output = tokengate(&["parse-units", "2.5"]);
    assert_eq!("2500000000000000000", stdout(&output).trim());

    let output = tokengate(&["parse-units", "0.0000001", "--decimals", "6"]);
    assert!(!output.status.success());
}

#[test]
fn check_fails_closed_when_node_is_unreachable() {
    let output = tokengate(&[
        "check",
        HOLDER_ADDRESS,
        "--token",
        TOKEN_ADDRESS,
        "--json",
        UNREACHABLE_RPC_URL,
    ]);
    assert_eq!(
        r#"{"hasAccess":false,"balance":"0"}"#,
        stdout(&output).trim()
    );
}

#[test]
fn failure_is_logged_to_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_tokengate"))
        .args(["check", HOLDER_ADDRESS, "--token", TOKEN_ADDRESS, UNREACHABLE_RPC_URL])
        .env_remove("TOKEN_GATE_MIN_BALANCE")
        .env("RUST_LOG", "error")
        .output()
        .unwrap();

    let stdout = stdout(&output);
    assert!(stdout.contains("has access: false"));
    assert!(stdout.contains("balance:    0"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error checking token balance"));
}

#[test]
fn balance_reports_read_errors() {
    let output = tokengate(&["balance", TOKEN_ADDRESS, HOLDER_ADDRESS, UNREACHABLE_RPC_URL]);
    assert!(!output.status.success());
}

#[test]
fn check_reads_gate_settings_from_env() {
    let output = Command::new(env!("CARGO_BIN_EXE_tokengate"))
        .args(["check", HOLDER_ADDRESS, "--json"])
        .env_remove("RPC_URL")
        .env("TOKEN_GATE_RPC_URL", UNREACHABLE_RPC_URL)
        .env("TOKEN_GATE_TOKEN_ADDRESS", TOKEN_ADDRESS)
        .env("TOKEN_GATE_MIN_BALANCE", "1")
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert_eq!(
        r#"{"hasAccess":false,"balance":"0"}"#,
        stdout(&output).trim()
    );
}

#[test]
fn check_without_token_address_fails() {
    let output = tokengate(&["check", HOLDER_ADDRESS, UNREACHABLE_RPC_URL]);
    assert!(!output.status.success());
}

#[test]
fn commands_log_their_dispatch() {
    let output = Command::new(env!("CARGO_BIN_EXE_tokengate"))
        .args(["format-units", "1000000", "--decimals", "6"])
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();

    assert_eq!("1", stdout(&output).trim());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Running command"));
    assert!(stderr.contains("format-units"));
}

#[cfg(target_os = "linux")]
#[test]
fn autocomplete_install_writes_script() {
    let data_home = std::env::temp_dir().join(format!("tokengate-completions-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&data_home);

    let output = Command::new(env!("CARGO_BIN_EXE_tokengate"))
        .args(["autocomplete", "install", "--shell", "bash"])
        .env("XDG_DATA_HOME", &data_home)
        .env("RUST_LOG", "off")
        .output()
        .unwrap();
    stdout(&output);

    let script =
        std::fs::read_to_string(data_home.join("bash-completion/completions/tokengate")).unwrap();
    assert!(script.contains("tokengate"));

    std::fs::remove_dir_all(&data_home).unwrap();
}
