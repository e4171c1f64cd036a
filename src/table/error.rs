//! Table error types.
//!
//! Remote failures carry the [`Operation`] that raised them so the controller
//! can pick the matching user-facing subtitle. Rejected commands (bad page
//! size, filtering disabled) never produce a notification.

use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::notify::Notification;

/// The four remote operations the controller issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    LoadAll,
    LoadFiltered,
    AddRecord,
    LoadColorOptions,
}

impl Operation {
    /// Subtitle shown to the user when this operation fails.
    pub fn failure_subtitle(&self) -> &'static str {
        match self {
            Operation::LoadAll | Operation::LoadFiltered => "Unable to retrieve data.",
            Operation::AddRecord => "Unable to add a person.",
            Operation::LoadColorOptions => "Unable to retrieve color options.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::LoadAll => "load all people",
            Operation::LoadFiltered => "load people by color",
            Operation::AddRecord => "add person",
            Operation::LoadColorOptions => "load color options",
        };
        f.write_str(name)
    }
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Failed to {operation}: the API returned no data")]
    #[diagnostic(code(people_table::table::empty_response))]
    EmptyResponse { operation: Operation },

    #[error("Failed to {operation}: the API answered with status {status}")]
    #[diagnostic(code(people_table::table::non_success_status))]
    NonSuccessStatus { operation: Operation, status: u16 },

    #[error("Failed to {operation}: {message}")]
    #[diagnostic(
        code(people_table::table::transport),
        help("Check that the people API is reachable.")
    )]
    Transport {
        operation: Operation,
        message: String,
    },

    #[error("Cancelled {operation}: the table was disposed")]
    #[diagnostic(code(people_table::table::cancelled))]
    Cancelled { operation: Operation },

    #[error("Page size must be greater than zero")]
    #[diagnostic(code(people_table::table::invalid_page_size))]
    InvalidPageSize,

    #[error("Page number must be at least 1")]
    #[diagnostic(code(people_table::table::invalid_page_number))]
    InvalidPageNumber,

    #[error("Filtering is not enabled")]
    #[diagnostic(
        code(people_table::table::filtering_disabled),
        help("Enable filtering before filtering by color.")
    )]
    FilteringDisabled,

    #[error("No color selected")]
    #[diagnostic(code(people_table::table::no_color_selected))]
    NoColorSelected,
}

impl TableError {
    /// The remote operation this error came from, if any.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            TableError::EmptyResponse { operation }
            | TableError::NonSuccessStatus { operation, .. }
            | TableError::Transport { operation, .. }
            | TableError::Cancelled { operation } => Some(*operation),
            _ => None,
        }
    }

    /// Notification to show the user, or `None` when the error stays silent.
    pub fn notification(&self, timeout: Duration) -> Option<Notification> {
        match self {
            TableError::EmptyResponse { operation }
            | TableError::NonSuccessStatus { operation, .. }
            | TableError::Transport { operation, .. } => {
                Some(Notification::error(operation.failure_subtitle(), timeout))
            }
            _ => None,
        }
    }
}

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;
