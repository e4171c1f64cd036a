//! Pagination and color-filter state for a people listing backed by a remote API.
//!
//! The [`table`] module owns the state machine and its fetch lifecycle, the
//! [`notify`] module carries user-facing notifications, and [`cli`] drives both
//! from the command line.

pub mod notify;
mod serde_utils;
pub mod table;

#[cfg(feature = "backend")]
pub mod cli;
