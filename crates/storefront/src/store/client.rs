//! HTTP client for the record store REST API.

use echeveria_core::{NewProduct, Product, ProductId};
use reqwest::Response;
use url::Url;

use super::StoreError;

/// Client for the record store's product endpoints.
///
/// Cheap to clone; wraps a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: Url,
}

impl StoreClient {
    /// Create a new record store client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(base_url: Url) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// Fetch the full product set.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store answers with a
    /// non-success status.
    pub async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let response = self.client.get(self.products_url()).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store answers with a
    /// non-success status (a missing product is not distinguished from any
    /// other failure).
    pub async fn get(&self, id: ProductId) -> Result<Product, StoreError> {
        let response = self.client.get(self.product_url(id)).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    /// Create a product. The store assigns and returns the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store answers with a
    /// non-success status.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, StoreError> {
        let response = self
            .client
            .post(self.products_url())
            .json(product)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    /// Replace a product in place. All fields are sent, including unchanged
    /// ones; the store does not support partial patches.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store answers with a
    /// non-success status.
    pub async fn replace(&self, product: &Product) -> Result<Product, StoreError> {
        let response = self
            .client
            .put(self.product_url(product.id))
            .json(product)
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store answers with a
    /// non-success status.
    pub async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let response = self.client.delete(self.product_url(id)).send().await?;
        check_status(response)?;
        Ok(())
    }

    fn products_url(&self) -> String {
        format!("{}api/products", base(&self.base_url))
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}api/products/{id}", base(&self.base_url))
    }
}

/// Base URL with a guaranteed trailing slash.
fn base(url: &Url) -> String {
    let s = url.as_str();
    if s.ends_with('/') {
        s.to_string()
    } else {
        format!("{s}/")
    }
}

/// Treat any non-success status as a uniform failure.
fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status {
            status: status.as_u16(),
        })
    }
}
