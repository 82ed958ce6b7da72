//! Centralized exit code definitions for the srckit binaries.
//!
//! All entry points report process status through [`ExitCode`] so the exit
//! contract stays in one place. The taxonomy is intentionally small: batch
//! housekeeping runs succeed even when individual files had to be skipped, so
//! per-file failures never surface here.

use std::fmt;

/// Exit codes returned by srckit runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion, including runs that skipped individual files.
    Ok = 0,

    /// Syntax or usage error.
    ///
    /// Returned when command-line arguments are invalid or an unknown flag
    /// or subcommand is supplied.
    Usage = 1,

    /// Configuration error.
    ///
    /// Returned when a run cannot start at all, such as a migration whose
    /// source root directory does not exist.
    Config = 2,
}

impl ExitCode {
    /// Returns the numeric exit code value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Returns a human-readable description of this exit code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Usage => "syntax or usage error",
            Self::Config => "configuration error",
        }
    }

    /// Returns `true` if this represents a successful exit.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Creates an exit code from an i32 value.
    ///
    /// Returns `None` if the value doesn't correspond to a known exit code.
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Ok),
            1 => Some(Self::Usage),
            2 => Some(Self::Config),
            _ => None,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        // Clamp to u8 range for std::process::ExitCode
        let value = code.as_i32().clamp(0, 255) as u8;
        Self::from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(ExitCode::Ok.as_i32(), 0);
        assert_eq!(ExitCode::Usage.as_i32(), 1);
        assert_eq!(ExitCode::Config.as_i32(), 2);
    }

    #[test]
    fn from_i32_roundtrips() {
        for code in [ExitCode::Ok, ExitCode::Usage, ExitCode::Config] {
            let value = code.as_i32();
            assert_eq!(ExitCode::from_i32(value), Some(code));
        }
    }

    #[test]
    fn from_i32_returns_none_for_unknown() {
        assert_eq!(ExitCode::from_i32(-1), None);
        assert_eq!(ExitCode::from_i32(3), None);
        assert_eq!(ExitCode::from_i32(255), None);
    }

    #[test]
    fn is_success_only_for_ok() {
        assert!(ExitCode::Ok.is_success());
        assert!(!ExitCode::Usage.is_success());
        assert!(!ExitCode::Config.is_success());
    }

    #[test]
    fn display_shows_description() {
        assert_eq!(format!("{}", ExitCode::Ok), "success");
        assert_eq!(format!("{}", ExitCode::Usage), "syntax or usage error");
        assert_eq!(format!("{}", ExitCode::Config), "configuration error");
    }

    #[test]
    fn into_process_exit_code_compiles() {
        let code: std::process::ExitCode = ExitCode::Config.into();
        let _ = code;
    }
}
