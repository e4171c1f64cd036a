//! The remote people API as the controller sees it.
//!
//! This module provides a trait-based abstraction over the HTTP client
//! so the controller can be driven by reqwest, gloo-net or a mock.

use async_trait::async_trait;
use miette::Diagnostic;
use thiserror::Error;

use super::models::{Color, Person};

#[cfg(test)]
use mockall::automock;

/// Errors raised by an API client before a usable answer arrived.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    #[diagnostic(code(people_table::api::request))]
    Request(String),

    #[error("Could not decode response: {0}")]
    #[diagnostic(code(people_table::api::decode))]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations of the people listing API.
///
/// The list operations answer `Ok(None)` when the API gave no usable body.
/// `add_person` reports the raw HTTP status. Futures are not required to be
/// `Send` so browser clients can implement the trait.
#[cfg_attr(test, automock)]
#[async_trait(?Send)]
pub trait PeopleApi {
    /// Every person.
    async fn get_people(&self) -> ApiResult<Option<Vec<Person>>>;

    /// People whose color matches `color`.
    async fn get_people_by_color(&self, color: &Color) -> ApiResult<Option<Vec<Person>>>;

    /// Create a person, returning the response status.
    async fn add_person(&self, person: &Person) -> ApiResult<u16>;

    /// Colors available for filtering.
    async fn get_color_options(&self) -> ApiResult<Option<Vec<Color>>>;
}
