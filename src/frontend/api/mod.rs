use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use people_table::table::{ApiError, ApiResult, Color, PeopleApi, Person};

const API_BASE: &str = "/api";

/// People API client running in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooPeopleApi;

/// Helper function to send a request whose body may be absent.
///
/// Non-2xx answers, empty bodies and `null` all mean "no data".
async fn fetch_optional<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<Option<T>> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        web_sys::console::warn_1(
            &format!("API answered with status {}", response.status()).into(),
        );
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

#[async_trait(?Send)]
impl PeopleApi for GlooPeopleApi {
    async fn get_people(&self) -> ApiResult<Option<Vec<Person>>> {
        fetch_optional(Request::get(&format!("{}/people", API_BASE))).await
    }

    async fn get_people_by_color(&self, color: &Color) -> ApiResult<Option<Vec<Person>>> {
        let request =
            Request::get(&format!("{}/people", API_BASE)).query([("color", color.as_str())]);
        fetch_optional(request).await
    }

    async fn add_person(&self, person: &Person) -> ApiResult<u16> {
        let response = Request::post(&format!("{}/people", API_BASE))
            .json(person)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(response.status())
    }

    async fn get_color_options(&self) -> ApiResult<Option<Vec<Color>>> {
        fetch_optional(Request::get(&format!("{}/colors", API_BASE))).await
    }
}
