use std::process::ExitCode;

/// Exit status of an audit run.
///
/// - `Success` (0): no broken keys (warnings do not count)
/// - `Failure` (1): at least one broken key, or no input files were given
/// - `Error` (2): the run could not be performed (bad config, missing root)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
