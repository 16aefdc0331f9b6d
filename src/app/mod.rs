pub mod cli_parser;
pub mod config;
pub mod console;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod run;

pub use config::AppConfig;
pub use run::run;

/// `ExitStatus` represents the exit states that will be return to the OS after termination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// All fine.
    Ok = 0,
    /// The queried domain does not exist.
    DomainNotFound = 1,
    /// CLI argument parsing failed.
    CliParsingFailed = 2,
    /// An unrecoverable error occurred. This is worst case and should not happen.
    UnrecoverableError = 3,
    /// The lookup or saving its results failed.
    Failed = 10,
}

impl From<ExitStatus> for i32 {
    fn from(exit_status: ExitStatus) -> Self {
        exit_status as i32
    }
}
