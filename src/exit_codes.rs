//! Process exit codes.
//!
//! Success and explicit help display exit 0. A terminal without color
//! support, or any unrecoverable rendering error, exits 1. Command-line
//! usage errors exit with the sysexits.h usage code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrideExitCode {
    /// Command completed successfully, or help was displayed.
    Success,
    /// Terminal lacks color support or rendering failed.
    RenderFailure,
    /// Command line usage error.
    UsageError,
}

impl PrideExitCode {
    pub fn code(&self) -> i32 {
        match self {
            PrideExitCode::Success => exitcode::OK,
            PrideExitCode::RenderFailure => 1,
            PrideExitCode::UsageError => exitcode::USAGE,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PrideExitCode::Success => "Success",
            PrideExitCode::RenderFailure => "Rendering failure",
            PrideExitCode::UsageError => "Command line usage error",
        }
    }
}

impl From<PrideExitCode> for i32 {
    fn from(code: PrideExitCode) -> Self {
        code.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(0, PrideExitCode::Success.code());
        assert_eq!(1, PrideExitCode::RenderFailure.code());
        assert_eq!(64, PrideExitCode::UsageError.code());
    }
}
