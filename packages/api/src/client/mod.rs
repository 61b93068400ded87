//! # REST client for the Green Guide backend
//!
//! [`ApiClient`] wraps a reusable [`reqwest::Client`], the backend base URL and
//! an optional bearer token. It is cheap to clone; the UI keeps one in context
//! and derives a token-carrying copy per request with [`ApiClient::with_token`].
//!
//! ## Endpoints
//!
//! | Area | Calls |
//! |------|-------|
//! | auth | [`login`](ApiClient::login), [`register`](ApiClient::register) |
//! | plants | [`list_plants`](ApiClient::list_plants), [`get_plant`](ApiClient::get_plant), [`create_plant`](ApiClient::create_plant), [`search_plants`](ApiClient::search_plants), [`list_trefle`](ApiClient::list_trefle) |
//! | gardens | [`list_gardens`](ApiClient::list_gardens), [`get_garden`](ApiClient::get_garden), [`create_garden`](ApiClient::create_garden), [`update_garden`](ApiClient::update_garden), [`delete_garden`](ApiClient::delete_garden) |
//! | blogs | [`list_blogs`](ApiClient::list_blogs), [`get_blog`](ApiClient::get_blog), [`create_blog`](ApiClient::create_blog), [`update_blog`](ApiClient::update_blog) |
//! | reviews | [`list_reviews`](ApiClient::list_reviews), [`create_review`](ApiClient::create_review) |
//!
//! Non-2xx responses are turned into [`ApiError::Backend`] carrying the
//! backend's `{"message": ...}` text. Nothing is retried.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use store::GreenGuideConfig;

use crate::error::ApiError;
use crate::forms::{BlogForm, GardenForm, GardenUpdate, MultipartFields, PlantForm};
use crate::models::{
    BlogPost, Garden, GardenEnvelope, LoginData, LoginRequest, LoginResponse, MessageResponse,
    Plant, RegisterRequest, Review, ReviewEnvelope, ReviewList, TreflePlant,
};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.token == other.token
    }
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    pub fn new(config: &GreenGuideConfig) -> Result<Self, ApiError> {
        let base_url = config.api.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(config.api.base_url.clone()));
        }

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.api.timeout_secs {
            0 => builder,
            secs => builder.timeout(std::time::Duration::from_secs(secs)),
        };
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Same client, with `Authorization: Bearer <token>` on every request.
    /// Empty tokens are dropped.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Resolve a backend-relative asset path (e.g. `/uploads/a.jpg`) to a full URL.
    pub fn asset_url(&self, path: &str) -> String {
        if path.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.url(path)
        }
    }

    // ---- auth ----

    /// `POST /auth/login`. The caller persists the returned token and role.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.send_json(Method::POST, "/auth/login", &body).await?;
        Ok(response.data)
    }

    /// `POST /auth/register`, returning the backend's confirmation message.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: MessageResponse =
            self.send_json(Method::POST, "/auth/register", &body).await?;
        Ok(response.message)
    }

    // ---- plants ----

    pub async fn list_plants(&self) -> Result<Vec<Plant>, ApiError> {
        self.get_json("/api/plants/list").await
    }

    pub async fn get_plant(&self, id: &str) -> Result<Plant, ApiError> {
        self.get_json(&format!("/api/plants/{id}")).await
    }

    pub async fn create_plant(&self, form: &PlantForm) -> Result<Plant, ApiError> {
        form.validate()?;
        self.send_multipart(Method::POST, "/api/plants", form.fields())
            .await
    }

    pub async fn search_plants(&self, category: &str) -> Result<Vec<Plant>, ApiError> {
        self.send_json(
            Method::POST,
            "/api/plants/search",
            &json!({ "category": category }),
        )
        .await
    }

    pub async fn list_trefle(&self) -> Result<Vec<TreflePlant>, ApiError> {
        self.get_json("/api/trefle/list").await
    }

    // ---- gardens ----

    pub async fn list_gardens(&self) -> Result<Vec<Garden>, ApiError> {
        self.get_json("/api/garden/list").await
    }

    pub async fn get_garden(&self, id: &str) -> Result<Garden, ApiError> {
        self.get_json(&format!("/api/garden/{id}")).await
    }

    pub async fn create_garden(&self, form: &GardenForm) -> Result<Garden, ApiError> {
        form.validate()?;
        let envelope: GardenEnvelope = self
            .send_multipart(Method::POST, "/api/garden", form.fields())
            .await?;
        Ok(envelope.garden)
    }

    pub async fn update_garden(&self, id: &str, update: &GardenUpdate) -> Result<Garden, ApiError> {
        let envelope: GardenEnvelope = self
            .send_json(Method::PUT, &format!("/api/garden/{id}"), update)
            .await?;
        Ok(envelope.garden)
    }

    pub async fn delete_garden(&self, id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/api/garden/{id}"));
        self.execute(request).await?;
        Ok(())
    }

    // ---- blogs ----

    pub async fn list_blogs(&self) -> Result<Vec<BlogPost>, ApiError> {
        self.get_json("/api/blogs/list").await
    }

    pub async fn get_blog(&self, id: &str) -> Result<BlogPost, ApiError> {
        self.get_json(&format!("/api/blogs/{id}")).await
    }

    pub async fn create_blog(&self, form: &BlogForm) -> Result<BlogPost, ApiError> {
        form.validate()?;
        self.send_multipart(Method::POST, "/api/blogs", form.create_fields())
            .await
    }

    /// `PUT /api/blogs/:id`. The response body is not used.
    pub async fn update_blog(&self, id: &str, form: &BlogForm) -> Result<(), ApiError> {
        form.validate()?;
        let request = self
            .request(Method::PUT, &format!("/api/blogs/{id}"))
            .multipart(form.update_fields().into_form());
        self.execute(request).await?;
        Ok(())
    }

    // ---- reviews ----

    pub async fn list_reviews(&self) -> Result<Vec<Review>, ApiError> {
        let list: ReviewList = self.get_json("/api/reviews/list").await?;
        Ok(list.review)
    }

    pub async fn create_review(&self, text: &str) -> Result<Review, ApiError> {
        if text.trim().is_empty() {
            return Err(ApiError::Validation("Review cannot be empty".into()));
        }
        let envelope: ReviewEnvelope = self
            .send_json(Method::POST, "/api/reviews", &json!({ "review": text }))
            .await?;
        Ok(envelope.review)
    }

    // ---- transport ----

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "backend request");
        let request = self.http.request(method, url);
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        decode(response).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .execute(self.request(method, path).json(body))
            .await?;
        decode(response).await
    }

    async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        fields: MultipartFields,
    ) -> Result<T, ApiError> {
        let request = self.request(method, path).multipart(fields.into_form());
        let response = self.execute(request).await?;
        decode(response).await
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageResponse>(&body)
            .ok()
            .map(|m| m.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| match status.canonical_reason() {
                Some(reason) => format!("Request failed: {} {reason}", status.as_u16()),
                None => format!("Request failed: {}", status.as_u16()),
            });
        tracing::warn!(status = status.as_u16(), %message, "backend returned an error");
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
