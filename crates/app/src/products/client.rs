//! Products API client.

use async_trait::async_trait;
use catalog::{
    draft::ProductPayload,
    products::{ProductId, ProductRecord},
};
use mockall::automock;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::products::errors::ProductsApiError;

/// REST client for the catalog backend.
#[derive(Debug, Clone)]
pub struct HttpProductsApi {
    base_url: String,
    token: Option<String>,
    http: Client,
}

impl HttpProductsApi {
    /// Create a client rooted at `base_url`, optionally sending a bearer token.
    #[must_use]
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|token| !token.trim().is_empty()),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.http.request(method, self.url(path));

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl ProductsApi for HttpProductsApi {
    async fn get_product(&self, id: &ProductId) -> Result<ProductRecord, ProductsApiError> {
        debug!(product = %id, "fetching product");

        let response = self
            .request(Method::GET, &format!("/product/one/{id}"))
            .send()
            .await?;

        envelope(response).await
    }

    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsApiError> {
        debug!("listing products");

        let response = self.request(Method::GET, "/product").send().await?;

        envelope(response).await
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<(), ProductsApiError> {
        debug!(external_id = %payload.external_id, "creating product");

        let response = self
            .request(Method::POST, "/product/create")
            .json(payload)
            .send()
            .await?;

        accepted(response).await?;

        Ok(())
    }

    async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<(), ProductsApiError> {
        debug!(product = %id, external_id = %payload.external_id, "updating product");

        let response = self
            .request(Method::PUT, &format!("/product/{id}"))
            .json(payload)
            .send()
            .await?;

        accepted(response).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// Retrieve a single product.
    async fn get_product(&self, id: &ProductId) -> Result<ProductRecord, ProductsApiError>;

    /// Retrieve every product.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsApiError>;

    /// Persist a new product.
    async fn create_product(&self, payload: &ProductPayload) -> Result<(), ProductsApiError>;

    /// Replace a persisted product.
    async fn update_product(
        &self,
        id: &ProductId,
        payload: &ProductPayload,
    ) -> Result<(), ProductsApiError>;
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

async fn accepted(response: Response) -> Result<Response, ProductsApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    Err(ProductsApiError::rejected(status.as_u16(), &body))
}

async fn envelope<T: DeserializeOwned>(response: Response) -> Result<T, ProductsApiError> {
    let body = accepted(response).await?.text().await?;

    parse_envelope(&body)
}

fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ProductsApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|error| ProductsApiError::UnexpectedResponse(error.to_string()))
}
