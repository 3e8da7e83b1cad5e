#[cfg(test)]
mod cli_tests {
    use assert_cmd::prelude::*;
    use predicates::prelude::*;
    use std::process::Command;

    #[test]
    fn test_cli_help_output() {
        let mut cmd = Command::cargo_bin("pride").unwrap();

        let assert_result = cmd.arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Options:"));

        // All rendering options are present
        assert!(help_output.contains("-g, --gradient"));
        assert!(help_output.contains("-v, --vertical"));
        assert!(help_output.contains("-l, --live"));
        assert!(help_output.contains("-b, --blend"));
        assert!(help_output.contains("-c, --character"));
        assert!(help_output.contains("-r, --random"));
        assert!(help_output.contains("--hold"));
        assert!(help_output.contains("--completions"));

        // Standard clap flags
        assert!(help_output.contains("-h, --help"));
        assert!(help_output.contains("-V, --version"));

        // The catalog listing is appended after the options
        assert!(help_output.contains("Flags:"));
        assert!(help_output.contains("rainbow"));
        assert!(help_output.contains("transgender"));
        assert!(help_output.contains("bisexual"));
    }

    #[test]
    fn test_cli_version() {
        let mut cmd = Command::cargo_bin("pride").unwrap();
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("pride"));
    }

    #[test]
    fn test_no_arguments_shows_help_and_exits_zero() {
        let mut cmd = Command::cargo_bin("pride").unwrap();
        cmd.env("FORCE_COLOR", "1")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn test_unknown_flag_shows_message_and_help() {
        let mut cmd = Command::cargo_bin("pride").unwrap();
        cmd.env("FORCE_COLOR", "1")
            .arg("tartan")
            .assert()
            .success()
            .stderr(predicate::str::contains("doesn't exist"))
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn test_unknown_blend_flag_shows_message_and_help() {
        let mut cmd = Command::cargo_bin("pride").unwrap();
        cmd.env("FORCE_COLOR", "1")
            .args(["rainbow", "--blend", "tartan,0.5"])
            .assert()
            .success()
            .stderr(predicate::str::contains("doesn't exist"))
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn test_no_color_support_is_fatal() {
        let mut cmd = Command::cargo_bin("pride").unwrap();
        // A piped stdout with color forced off reports no color support.
        cmd.env_remove("FORCE_COLOR")
            .env_remove("CLICOLOR_FORCE")
            .env("NO_COLOR", "1")
            .arg("rainbow")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("color"));
    }

    #[test]
    fn test_completions_bash() {
        let mut cmd = Command::cargo_bin("pride").unwrap();
        cmd.args(["--completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("pride"));
    }

    #[test]
    fn test_completions_rejects_unknown_shell() {
        let mut cmd = Command::cargo_bin("pride").unwrap();
        cmd.args(["--completions", "tcsh"]).assert().failure();
    }
}
