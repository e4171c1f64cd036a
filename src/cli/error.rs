use miette::Diagnostic;
use thiserror::Error;

use crate::table::TableError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Could not set up the HTTP client: {message}")]
    #[diagnostic(code(people_table::cli::client_setup))]
    ClientSetup { message: String },

    #[error("Invalid argument: {message}")]
    #[diagnostic(
        code(people_table::cli::invalid_argument),
        help("Attributes are passed as key=value, e.g. --attr age=36")
    )]
    InvalidArgument { message: String },

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(people_table::cli::output))]
    Output { message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Table(#[from] TableError),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
