//! Reusable hooks for common UI patterns

mod use_table;

pub use use_table::*;
