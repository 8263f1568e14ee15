//! REST Backend Client
//!
//! Thin wrappers over the recipe API's JSON endpoints. Every entity exposes
//! `GET /{entity}`, `GET /{entity}/{id}`, `POST /{entity}`,
//! `PUT /{entity}/{id}` and `DELETE /{entity}/{id}`; errors may carry a JSON
//! body with a `message` field.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback when `RECIPE_API_URL` is not set at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response, with the backend's `message` field when present.
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Error body shape returned by the backend on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Base URL from the `RECIPE_API_URL` compile-time env var.
    pub fn from_env() -> Self {
        Self::new(option_env!("RECIPE_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /{endpoint}`
    pub async fn list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, ApiError> {
        let response = self.http.get(self.url(endpoint)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `GET /{endpoint}/{id}`
    pub async fn get_one<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: impl Display,
    ) -> Result<T, ApiError> {
        let url = self.url(&format!("{}/{}", endpoint, id));
        let response = self.http.get(url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `POST /{endpoint}`
    pub async fn create<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.http.post(self.url(endpoint)).json(body).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `PUT /{endpoint}/{id}`
    pub async fn update<T, B>(
        &self,
        endpoint: &str,
        id: impl Display,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(&format!("{}/{}", endpoint, id));
        let response = self.http.put(url).json(body).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `DELETE /{endpoint}/{id}`
    pub async fn delete(&self, endpoint: &str, id: impl Display) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", endpoint, id));
        let response = self.http.delete(url).send().await?;
        check(response).await?;
        Ok(())
    }

    /// `POST /{endpoint}/{id}/{relation}/{related}`, returning the updated
    /// parent record.
    pub async fn link<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: impl Display,
        relation: &str,
        related: impl Display,
    ) -> Result<T, ApiError> {
        let url = self.url(&format!("{}/{}/{}/{}", endpoint, id, relation, related));
        let response = self.http.post(url).json(&serde_json::json!({})).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// `DELETE /{endpoint}/{id}/{relation}/{related}`, returning the updated
    /// parent record.
    pub async fn unlink<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        id: impl Display,
        relation: &str,
        related: impl Display,
    ) -> Result<T, ApiError> {
        let url = self.url(&format!("{}/{}/{}/{}", endpoint, id, relation, related));
        let response = self.http.delete(url).send().await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Map a non-2xx response to [`ApiError::Status`], decoding the backend's
/// optional `{message}` body.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("error")
            )
        });
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_backend_message() {
        let err = ApiError::Status {
            status: 404,
            message: "Recipe not found".to_string(),
        };
        assert_eq!(err.to_string(), "Recipe not found");
    }

    #[test]
    fn transport_error_displays_reason() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn urls_join_base_and_path() {
        let client = ApiClient::new("http://localhost:8080/api");
        assert_eq!(client.url("/recipes"), "http://localhost:8080/api/recipes");
        assert_eq!(
            client.url(&format!("/recipes/{}", 7)),
            "http://localhost:8080/api/recipes/7"
        );
        assert_eq!(
            client.url(&format!("/books/{}/recipes/{}", "978-1", 7)),
            "http://localhost:8080/api/books/978-1/recipes/7"
        );
    }
}
