#![deny(unsafe_code)]

use std::{env, io, process::ExitCode};

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let status = cli::run(env::args_os(), &mut stdout, &mut stderr);
    cli::exit_code_from(status)
}

#[cfg(test)]
mod tests {
    use core::version::PROGRAM_NAME;

    #[test]
    fn version_flag_reports_success() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let status = cli::run([PROGRAM_NAME, "--version"], &mut stdout, &mut stderr);

        assert_eq!(status, 0);
        assert!(!stdout.is_empty(), "--version should print to stdout");
        assert!(stderr.is_empty(), "--version must not write to stderr");
    }

    #[test]
    fn unknown_flag_reports_usage_failure() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let status = cli::run(
            [PROGRAM_NAME, "--definitely-invalid-option"],
            &mut stdout,
            &mut stderr,
        );

        assert_eq!(status, 1);
        assert!(stdout.is_empty(), "invalid flag should not write to stdout");
        assert!(!stderr.is_empty(), "invalid flag should emit a diagnostic");
    }
}
