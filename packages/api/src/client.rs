//! # HTTP client for the HBNB REST API
//!
//! [`HbnbClient`] wraps a [`reqwest::Client`] (which uses `fetch` in the
//! browser) and a fixed base URL. Each method maps to one endpoint:
//!
//! | Method | Endpoint | Auth |
//! |--------|----------|------|
//! | [`login`](HbnbClient::login) | `POST /auth/login` | none |
//! | [`logout`](HbnbClient::logout) | `POST /auth/logout` | bearer |
//! | [`current_user`](HbnbClient::current_user) | `GET /auth/protected` | bearer |
//! | [`list_places`](HbnbClient::list_places) | `GET /places/` | optional |
//! | [`get_place`](HbnbClient::get_place) | `GET /places/{id}` | optional |
//! | [`list_reviews`](HbnbClient::list_reviews) | `GET /places/{id}/reviews` | none |
//! | [`submit_review`](HbnbClient::submit_review) | `POST /places/{id}/reviews` | bearer |
//! | [`register`](HbnbClient::register) | `POST /users/` | none |
//!
//! Non-success responses become [`ApiError::Api`] with the message produced by
//! [`crate::ErrorEnvelope`]. Nothing is retried and no timeout is set.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use store::ApiConfig;

use crate::error::{ApiError, Result};
use crate::models::{
    LoginRequest, LoginResponse, NewUser, Place, PlaceList, ProtectedResponse, Review,
    ReviewDraft, ReviewList,
};

/// Client for the HBNB REST API.
#[derive(Clone, Debug)]
pub struct HbnbClient {
    http: reqwest::Client,
    base_url: String,
}

impl HbnbClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_base_url(&config.base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Exchange credentials for an access token.
    ///
    /// A success response without `access_token` is an error: the caller has
    /// nothing to store.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .fetch(self.request(Method::POST, "auth/login", None).json(&body))
            .await?;
        match response.access_token.as_deref() {
            Some(token) if !token.is_empty() => Ok(response),
            _ => Err(ApiError::MissingData(
                "No token received from server".to_string(),
            )),
        }
    }

    /// Tell the API the token is no longer in use.
    pub async fn logout(&self, token: &str) -> Result<()> {
        self.execute(self.request(Method::POST, "auth/logout", Some(token)))
            .await
            .map(drop)
    }

    /// Who the token belongs to.
    pub async fn current_user(&self, token: &str) -> Result<ProtectedResponse> {
        self.fetch(self.request(Method::GET, "auth/protected", Some(token)))
            .await
    }

    pub async fn list_places(&self, token: Option<&str>) -> Result<Vec<Place>> {
        let list: PlaceList = self
            .fetch(self.request(Method::GET, "places/", token))
            .await?;
        Ok(list.into_places())
    }

    pub async fn get_place(&self, place_id: &str, token: Option<&str>) -> Result<Place> {
        self.fetch(self.request(Method::GET, &format!("places/{place_id}"), token))
            .await
    }

    pub async fn list_reviews(&self, place_id: &str) -> Result<Vec<Review>> {
        let list: ReviewList = self
            .fetch(self.request(Method::GET, &format!("places/{place_id}/reviews"), None))
            .await?;
        Ok(list.into_reviews())
    }

    pub async fn submit_review(
        &self,
        place_id: &str,
        token: &str,
        draft: &ReviewDraft,
    ) -> Result<Review> {
        let path = format!("places/{place_id}/reviews");
        self.fetch(self.request(Method::POST, &path, Some(token)).json(draft))
            .await
    }

    /// Create an account. The created user is not needed by the client.
    pub async fn register(&self, user: &NewUser) -> Result<()> {
        self.execute(self.request(Method::POST, "users/", None).json(user))
            .await
            .map(drop)
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode a JSON success body.
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let bytes = self.execute(request).await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!("Undecodable response body: {}", e);
            ApiError::MissingData("Unexpected response from server".to_string())
        })
    }

    /// Send, returning the body of a success response.
    async fn execute(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!("{} {}", method, url);

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", method, url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            Ok(bytes.to_vec())
        } else {
            let err = ApiError::from_response(status.as_u16(), &bytes);
            tracing::warn!("{} {} returned {}: {}", method, url, status, err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HbnbClient::with_base_url("http://127.0.0.1:5000/api/v1/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5000/api/v1");
        assert_eq!(client.url("places/"), "http://127.0.0.1:5000/api/v1/places/");
        assert_eq!(
            client.url("/places/p1/reviews"),
            "http://127.0.0.1:5000/api/v1/places/p1/reviews"
        );
    }

    #[test]
    fn test_from_config() {
        let client = HbnbClient::new(&ApiConfig::default());
        assert_eq!(client.url("auth/login"), "http://127.0.0.1:5000/api/v1/auth/login");
    }

    #[test]
    fn test_bearer_header() {
        let client = HbnbClient::with_base_url("http://localhost/api/v1");
        let request = client
            .request(Method::GET, "auth/protected", Some("a.b.c"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer a.b.c"
        );

        let anonymous = client.request(Method::GET, "places/", None).build().unwrap();
        assert!(anonymous.headers().get("authorization").is_none());
    }

    #[test]
    fn test_review_body() {
        let client = HbnbClient::with_base_url("http://localhost/api/v1");
        let draft = ReviewDraft::parse("4", "Nice").unwrap();
        let request = client
            .request(Method::POST, "places/p1/reviews", Some("t"))
            .json(&draft)
            .build()
            .unwrap();
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(value, serde_json::json!({ "text": "Nice", "rating": 4 }));
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is not expected to accept connections.
        let client = HbnbClient::with_base_url("http://127.0.0.1:9/api/v1");
        let err = client.list_places(None).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status(), None);
    }
}
