//! Integration test harness for the Echeveria Store.
//!
//! The storefront's only collaborator is the record store REST API, so the
//! end-to-end tests spawn two in-process servers on ephemeral ports:
//!
//! - a mock record store (an axum app backed by an in-memory product list)
//!   that also records the raw JSON bodies it receives, so tests can assert
//!   on the exact wire format of create and replace payloads;
//! - the real storefront app from `echeveria_storefront::app`.
//!
//! # Example
//!
//! ```rust,ignore
//! let store = spawn_record_store(vec![sample_product(1)]).await;
//! let storefront = spawn_storefront(&store.url).await;
//!
//! let body = reqwest::get(format!("{storefront}/products"))
//!     .await?
//!     .text()
//!     .await?;
//! assert!(body.contains("Echeveria Blue"));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::expect_used)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use echeveria_core::{NewProduct, Product, ProductId};
use echeveria_storefront::config::StorefrontConfig;
use echeveria_storefront::state::AppState;
use serde_json::Value;
use url::Url;

/// A running mock record store.
pub struct MockRecordStore {
    /// Base URL of the mock server (e.g. `http://127.0.0.1:49152`).
    pub url: String,
    state: MockState,
}

impl MockRecordStore {
    /// Snapshot of the products currently held by the store.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.state.inner.products.lock().expect("lock").clone()
    }

    /// Raw JSON bodies received by POST `/api/products`, in order.
    #[must_use]
    pub fn created_bodies(&self) -> Vec<Value> {
        self.state.inner.created.lock().expect("lock").clone()
    }

    /// Raw JSON bodies received by PUT `/api/products/{id}`, in order.
    #[must_use]
    pub fn replaced_bodies(&self) -> Vec<Value> {
        self.state.inner.replaced.lock().expect("lock").clone()
    }

    /// Ids received by DELETE `/api/products/{id}`, in order.
    #[must_use]
    pub fn deleted_ids(&self) -> Vec<i64> {
        self.state.inner.deleted.lock().expect("lock").clone()
    }
}

#[derive(Clone)]
struct MockState {
    inner: Arc<MockInner>,
}

struct MockInner {
    products: Mutex<Vec<Product>>,
    next_id: AtomicI64,
    created: Mutex<Vec<Value>>,
    replaced: Mutex<Vec<Value>>,
    deleted: Mutex<Vec<i64>>,
}

/// Spawn a mock record store seeded with the given products.
///
/// # Panics
///
/// Panics if binding the listener fails.
pub async fn spawn_record_store(seed: Vec<Product>) -> MockRecordStore {
    let next_id = seed.iter().map(|p| p.id.as_i64()).max().unwrap_or(0) + 1;
    let state = MockState {
        inner: Arc::new(MockInner {
            products: Mutex::new(seed),
            next_id: AtomicI64::new(next_id),
            created: Mutex::new(Vec::new()),
            replaced: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }),
    };

    let app = Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(replace_product).delete(delete_product),
        )
        .with_state(state.clone());

    let url = serve(app).await;
    MockRecordStore { url, state }
}

/// Spawn a record store that answers every request with 500.
///
/// # Panics
///
/// Panics if binding the listener fails.
pub async fn spawn_failing_store() -> String {
    let app = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    serve(app).await
}

/// Spawn the storefront wired to the given record store URL.
///
/// Returns the storefront's base URL.
///
/// # Panics
///
/// Panics if the URL is invalid or binding the listener fails.
pub async fn spawn_storefront(record_store_url: &str) -> String {
    let config = StorefrontConfig {
        host: "127.0.0.1".parse().expect("host"),
        port: 0,
        record_store_url: Url::parse(record_store_url).expect("record store url"),
    };
    let state = AppState::new(config).expect("app state");
    serve(echeveria_storefront::app(state)).await
}

/// Bind an ephemeral port, serve the router in the background, and return
/// the base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    format!("http://{addr}")
}

/// An HTTP client that does not follow redirects, so tests can assert on
/// the redirect responses themselves.
///
/// # Panics
///
/// Panics if the client fails to build.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("http client")
}

/// A seeded product for tests.
///
/// # Panics
///
/// Panics if the hardcoded price literal fails to parse.
#[must_use]
pub fn sample_product(id: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: "Echeveria Blue".to_string(),
        description: "A hardy rosette succulent.".to_string(),
        price: "12.50".parse().expect("decimal"),
        stock: 5,
        image: "/Moonstones Pachyphytum.png".to_string(),
    }
}

// =============================================================================
// Mock record store handlers
// =============================================================================

async fn list_products(State(state): State<MockState>) -> Json<Vec<Product>> {
    Json(state.inner.products.lock().expect("lock").clone())
}

async fn get_product(
    State(state): State<MockState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, StatusCode> {
    state
        .inner
        .products
        .lock()
        .expect("lock")
        .iter()
        .find(|p| p.id.as_i64() == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_product(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> Result<Json<Product>, StatusCode> {
    state.inner.created.lock().expect("lock").push(body.clone());

    let new: NewProduct = serde_json::from_value(body).map_err(|_| StatusCode::BAD_REQUEST)?;
    let id = state.inner.next_id.fetch_add(1, Ordering::SeqCst);
    let product = Product::from_new(ProductId::new(id), new);

    state
        .inner
        .products
        .lock()
        .expect("lock")
        .push(product.clone());
    Ok(Json(product))
}

async fn replace_product(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<Product>, StatusCode> {
    state
        .inner
        .replaced
        .lock()
        .expect("lock")
        .push(body.clone());

    let product: Product = serde_json::from_value(body).map_err(|_| StatusCode::BAD_REQUEST)?;
    let mut products = state.inner.products.lock().expect("lock");
    let Some(slot) = products.iter_mut().find(|p| p.id.as_i64() == id) else {
        return Err(StatusCode::NOT_FOUND);
    };
    *slot = product.clone();

    Ok(Json(product))
}

async fn delete_product(State(state): State<MockState>, Path(id): Path<i64>) -> StatusCode {
    state.inner.deleted.lock().expect("lock").push(id);

    let mut products = state.inner.products.lock().expect("lock");
    let before = products.len();
    products.retain(|p| p.id.as_i64() != id);

    if products.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
