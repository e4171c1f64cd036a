//! Table state - pagination, color filtering and the fetch lifecycle.
//!
//! This module provides the [`TableController`], the pure pagination
//! functions it is built on, and the [`PeopleApi`] trait it talks to.

mod api;
mod controller;
mod error;
mod models;
mod pagination;
mod store;

#[cfg(test)]
pub use api::MockPeopleApi;
pub use api::{ApiError, ApiResult, PeopleApi};
pub use controller::{TableConfig, TableController};
pub use error::{Operation, TableError, TableResult};
pub use models::{
    Color, DEFAULT_PAGE_SIZE, FilterState, PageCursor, PageState, Person, TableState,
};
pub use pagination::{PageChange, compute_page, page_bounds, subset_of, total_pages};
pub use store::TableView;
