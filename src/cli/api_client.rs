use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cli::error::{CliError, CliResult};
use crate::table::{ApiError, ApiResult, Color, PeopleApi, Person};

/// Default base URL of the people API.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// HTTP client for the people REST API
pub struct HttpPeopleApi {
    base_url: String,
    client: Client,
}

impl HttpPeopleApi {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. PEOPLE_API_URL environment variable
    /// 3. Default: http://localhost:3000
    ///
    /// `timeout` bounds every request; without it a hung request never
    /// resolves.
    pub fn new(api_url: Option<String>, timeout: Option<Duration>) -> CliResult<Self> {
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = api_url
            .or_else(|| env::var("PEOPLE_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| CliError::ClientSetup {
            message: e.to_string(),
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.get(&url)
    }

    /// Create a POST request builder
    pub fn post(&self, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.post(&url)
    }

    /// Send a request whose body may be absent.
    ///
    /// A non-success status, an empty body or a JSON `null` all count as
    /// "no data"; only transport and decoding failures are errors.
    async fn fetch_optional<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<Option<T>> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "API answered without data");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl PeopleApi for HttpPeopleApi {
    async fn get_people(&self) -> ApiResult<Option<Vec<Person>>> {
        debug!(base_url = %self.base_url, "GET /people");
        Self::fetch_optional(self.get("/people")).await
    }

    async fn get_people_by_color(&self, color: &Color) -> ApiResult<Option<Vec<Person>>> {
        debug!(base_url = %self.base_url, %color, "GET /people?color");
        Self::fetch_optional(self.get("/people").query(&[("color", color.as_str())])).await
    }

    async fn add_person(&self, person: &Person) -> ApiResult<u16> {
        debug!(base_url = %self.base_url, name = %person.name, "POST /people");
        let response = self
            .post("/people")
            .json(person)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(response.status().as_u16())
    }

    async fn get_color_options(&self) -> ApiResult<Option<Vec<Color>>> {
        debug!(base_url = %self.base_url, "GET /colors");
        Self::fetch_optional(self.get("/colors")).await
    }
}
