//! Catalog service client.
//!
//! Thin REST wrapper: one method per remote operation, JSON in and out,
//! no retries and no caching. Mutations report success only after the
//! service has acknowledged them.

use std::sync::Arc;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::instrument;

use kiosk_core::{Product, ProductId, ProductInput, User, UserId};

use crate::error::CatalogError;
use crate::types::{AuthToken, CartOrder, CartReceipt};

/// Base URL of the public catalog service.
pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";

/// Client for the remote catalog service.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the service at `base_url`.
    ///
    /// A trailing slash on the base is tolerated and trimmed.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not parse.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        execute(self.inner.client.get(self.url("/products"))).await
    }

    /// Create a product and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; nothing is created locally.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, CatalogError> {
        execute(self.inner.client.post(self.url("/products")).json(input)).await
    }

    /// Replace the writable fields of an existing product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the product is left as it was.
    #[instrument(skip(self, input), fields(id = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, CatalogError> {
        execute(
            self.inner
                .client
                .put(self.url(&format!("/products/{id}")))
                .json(input),
        )
        .await
    }

    /// Delete a product, returning the echoed record.
    ///
    /// The service answers `null` for an id it does not know; that surfaces
    /// as `Ok(None)` rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        execute_optional(self.inner.client.delete(self.url(&format!("/products/{id}")))).await
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Fetch the full user list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not parse.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, CatalogError> {
        execute(self.inner.client.get(self.url("/users"))).await
    }

    /// Delete a user, returning the echoed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_user(&self, id: UserId) -> Result<Option<User>, CatalogError> {
        execute_optional(self.inner.client.delete(self.url(&format!("/users/{id}")))).await
    }

    // =========================================================================
    // Orders and sign-in
    // =========================================================================

    /// Submit a checkout order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the caller's cart is its own
    /// to keep or clear.
    #[instrument(skip(self, order), fields(user_id = %order.user_id, lines = order.products.len()))]
    pub async fn create_cart(&self, order: &CartOrder) -> Result<CartReceipt, CatalogError> {
        execute(self.inner.client.post(self.url("/carts")).json(order)).await
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; rejected credentials come back
    /// as a `Status` error carrying the service's message.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthToken, CatalogError> {
        #[derive(serde::Serialize)]
        struct Credentials<'a> {
            username: &'a str,
            password: &'a str,
        }

        let credentials = Credentials { username, password };

        execute(
            self.inner
                .client
                .post(self.url("/auth/login"))
                .json(&credentials),
        )
        .await
    }
}

/// Send a request and return the body of a successful response.
async fn read_body(request: RequestBuilder) -> Result<String, CatalogError> {
    let response = request.send().await?;
    let status = response.status();

    // Read the body as text first for better error diagnostics
    let response_text = response.text().await?;

    if status.is_success() {
        return Ok(response_text);
    }

    tracing::error!(
        status = %status,
        body = %snippet(&response_text),
        "catalog service returned non-success status"
    );

    Err(CatalogError::Status {
        status: status.as_u16(),
        message: server_message(&response_text),
    })
}

async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, CatalogError> {
    let body = read_body(request).await?;
    decode(&body)
}

/// Like [`execute`], but tolerates `null` or empty bodies, which the service
/// sends when deleting an id it does not know.
async fn execute_optional<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<Option<T>, CatalogError> {
    let body = read_body(request).await?;
    decode_optional(&body)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %snippet(body),
            "failed to parse catalog response"
        );
        CatalogError::Body(e)
    })
}

fn decode_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, CatalogError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    decode(trimmed).map(Some)
}

/// Pull a human-readable message out of a failure body.
///
/// The service reports sign-in failures as `{"message": "..."}`; anything
/// else is passed through as a trimmed snippet.
fn server_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Some(parsed.message);
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(200).collect())
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(500).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = CatalogClient::new("https://example.com/");
        assert_eq!(client.base_url(), "https://example.com");
        assert_eq!(client.url("/products"), "https://example.com/products");
    }

    #[test]
    fn test_url_joins_paths() {
        let client = CatalogClient::new(DEFAULT_API_BASE);
        assert_eq!(
            client.url(&format!("/products/{}", ProductId::new(7))),
            "https://fakestoreapi.com/products/7"
        );
    }

    #[test]
    fn test_decode_valid_body() {
        let parsed: Vec<i64> = decode("[1, 2, 3]").unwrap();
        assert_eq!(parsed, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_malformed_body() {
        let result = decode::<Vec<i64>>("<!DOCTYPE html>");
        assert!(matches!(result, Err(CatalogError::Body(_))));
    }

    #[test]
    fn test_decode_optional_null_and_empty() {
        assert_eq!(decode_optional::<i64>("null").unwrap(), None);
        assert_eq!(decode_optional::<i64>("").unwrap(), None);
        assert_eq!(decode_optional::<i64>("  \n").unwrap(), None);
        assert_eq!(decode_optional::<i64>("5").unwrap(), Some(5));
    }

    #[test]
    fn test_server_message_from_json() {
        let body = r#"{"message": "username or password is incorrect"}"#;
        assert_eq!(
            server_message(body).as_deref(),
            Some("username or password is incorrect")
        );
    }

    #[test]
    fn test_server_message_from_plain_text() {
        assert_eq!(
            server_message("  Internal Server Error \n").as_deref(),
            Some("Internal Server Error")
        );
    }

    #[test]
    fn test_server_message_empty_body() {
        assert_eq!(server_message(""), None);
        assert_eq!(server_message("   "), None);
    }

    #[test]
    fn test_server_message_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(server_message(&body).unwrap().len(), 200);
    }

    #[tokio::test]
    async fn test_unreachable_service_maps_to_network_error() {
        // Port 9 (discard) is closed on any sane host, so this fails fast.
        let client = CatalogClient::new("http://127.0.0.1:9");
        let result = client.list_products().await;
        assert!(matches!(result, Err(CatalogError::Network(_))));
    }
}
