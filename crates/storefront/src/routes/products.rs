//! Product route handlers.
//!
//! The catalog, detail, create, and edit pages are thin consumers of the
//! record store client: one fetch per page load, one mutation per submit.
//! Failures are surfaced inline on the page that caused them; only the
//! delete flow propagates a hard error.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use echeveria_core::{IMAGE_OPTIONS, ImageOption, NewProduct, Product, ProductId, is_known_image};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Inline message when a product fails to load.
const LOAD_FAILED: &str = "Failed to load product. Please try again.";
/// Inline message when the create submit fails.
const ADD_FAILED: &str = "Failed to add product. Please try again.";
/// Inline message when the update submit fails.
const UPDATE_FAILED: &str = "Failed to update product. Please try again.";

// =============================================================================
// View Models
// =============================================================================

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: i64,
    pub image: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            image: product.image,
        }
    }
}

/// Raw form state as submitted by the browser.
///
/// Price and stock arrive as strings from the number inputs and are coerced
/// on submit; blank values default to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub image: String,
}

impl ProductForm {
    /// Coerce the raw form fields into a record store payload.
    fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            price: parse_price(&self.price),
            stock: parse_stock(&self.stock),
            image: normalize_image(self.image),
        }
    }
}

/// Field values used to (re-)render a form, always as display strings.
#[derive(Clone, Default)]
pub struct FormView {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub image: String,
}

impl From<&ProductForm> for FormView {
    fn from(form: &ProductForm) -> Self {
        Self {
            name: form.name.clone(),
            description: form.description.clone(),
            price: form.price.clone(),
            stock: form.stock.clone(),
            image: form.image.clone(),
        }
    }
}

impl From<Product> for FormView {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            image: product.image,
        }
    }
}

/// Coerce a price field to a decimal; blank or unparsable input becomes zero.
fn parse_price(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Coerce a stock field to an integer; blank or unparsable input becomes zero.
fn parse_stock(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Keep only image paths from the fixed set.
///
/// The select control already constrains the value in the browser; anything
/// else (a tampered submit) falls back to the unselected state.
fn normalize_image(raw: String) -> String {
    if is_known_image(&raw) {
        raw
    } else {
        String::new()
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Product catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: Option<ProductView>,
    pub error: Option<String>,
}

/// Create form page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct ProductNewTemplate {
    pub form: FormView,
    pub error: Option<String>,
    pub images: &'static [ImageOption],
}

/// Edit form page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct ProductEditTemplate {
    pub id: ProductId,
    pub form: FormView,
    pub error: Option<String>,
    pub images: &'static [ImageOption],
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the product catalog.
///
/// A retrieval failure renders the empty catalog rather than an error page;
/// the failure is logged so it is not lost entirely.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let products = match state.store().list().await {
        Ok(products) => products.into_iter().map(ProductView::from).collect(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch products, rendering empty catalog");
            Vec::new()
        }
    };

    ProductsIndexTemplate { products }
}

/// Display the product detail page.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.store().get(ProductId::new(id)).await {
        Ok(product) => ProductShowTemplate {
            product: Some(product.into()),
            error: None,
        },
        Err(err) => {
            tracing::error!(error = %err, product_id = id, "Failed to fetch product");
            ProductShowTemplate {
                product: None,
                error: Some(LOAD_FAILED.to_string()),
            }
        }
    }
}

/// Display the create form.
pub async fn new_form() -> impl IntoResponse {
    ProductNewTemplate {
        form: FormView::default(),
        error: None,
        images: IMAGE_OPTIONS,
    }
}

/// Handle the create submit.
///
/// On success redirects to the catalog; on failure re-renders the form with
/// the entered values intact so the user can retry.
#[instrument(skip_all, fields(name = %form.name))]
pub async fn create(State(state): State<AppState>, Form(form): Form<ProductForm>) -> Response {
    let payload = form.clone().into_new_product();

    match state.store().create(&payload).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id, "Product created");
            Redirect::to("/products").into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to create product");
            ProductNewTemplate {
                form: FormView::from(&form),
                error: Some(ADD_FAILED.to_string()),
                images: IMAGE_OPTIONS,
            }
            .into_response()
        }
    }
}

/// Display the edit form, populated from the record store.
///
/// If the fetch fails the form is left unpopulated and the error is shown
/// inline.
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.store().get(ProductId::new(id)).await {
        Ok(product) => ProductEditTemplate {
            id: ProductId::new(id),
            form: product.into(),
            error: None,
            images: IMAGE_OPTIONS,
        },
        Err(err) => {
            tracing::error!(error = %err, product_id = id, "Failed to fetch product for edit");
            ProductEditTemplate {
                id: ProductId::new(id),
                form: FormView::default(),
                error: Some(LOAD_FAILED.to_string()),
                images: IMAGE_OPTIONS,
            }
        }
    }
}

/// Handle the update submit.
///
/// Sends the full record including unchanged fields (the record store does
/// a replace, not a partial patch). On success redirects to the detail
/// page; on failure re-renders with the submitted values intact.
#[instrument(skip_all, fields(product_id = id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Response {
    let product = Product::from_new(ProductId::new(id), form.clone().into_new_product());

    match state.store().replace(&product).await {
        Ok(_) => {
            tracing::info!("Product updated");
            Redirect::to(&format!("/products/{id}")).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to update product");
            ProductEditTemplate {
                id: ProductId::new(id),
                form: FormView::from(&form),
                error: Some(UPDATE_FAILED.to_string()),
                images: IMAGE_OPTIONS,
            }
            .into_response()
        }
    }
}

/// Handle the delete submit, then return to the catalog.
#[instrument(skip_all, fields(product_id = id))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Redirect> {
    state.store().delete(ProductId::new(id)).await?;
    tracing::info!("Product deleted");
    Ok(Redirect::to("/products"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            name: "Echeveria Blue".to_string(),
            description: "A hardy rosette succulent.".to_string(),
            price: "12.50".to_string(),
            stock: "5".to_string(),
            image: "/Moonstones Pachyphytum.png".to_string(),
        }
    }

    #[test]
    fn test_parse_price_coercion() {
        assert_eq!(parse_price("12.50"), "12.5".parse::<Decimal>().unwrap());
        assert_eq!(parse_price(" 9.99 "), "9.99".parse::<Decimal>().unwrap());
        assert_eq!(parse_price(""), Decimal::ZERO);
        assert_eq!(parse_price("not a number"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_stock_coercion() {
        assert_eq!(parse_stock("5"), 5);
        assert_eq!(parse_stock(" 12 "), 12);
        assert_eq!(parse_stock(""), 0);
        assert_eq!(parse_stock("many"), 0);
    }

    #[test]
    fn test_unknown_image_path_is_cleared() {
        let mut form = filled_form();
        form.image = "/not-in-the-set.png".to_string();
        assert_eq!(form.into_new_product().image, "");

        // Known paths and the unselected state pass through untouched
        assert_eq!(
            filled_form().into_new_product().image,
            "/Moonstones Pachyphytum.png"
        );
        assert_eq!(normalize_image(String::new()), "");
    }

    #[test]
    fn test_form_coerces_to_numeric_payload() {
        let payload = filled_form().into_new_product();
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["name"], "Echeveria Blue");
        assert_eq!(value["description"], "A hardy rosette succulent.");
        assert_eq!(value["price"], serde_json::json!(12.5));
        assert_eq!(value["stock"], serde_json::json!(5));
        assert_eq!(value["image"], "/Moonstones Pachyphytum.png");
    }

    #[test]
    fn test_update_payload_is_a_full_replace() {
        let product = Product::from_new(ProductId::new(7), filled_form().into_new_product());
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], serde_json::json!(7));
        assert_eq!(value["name"], "Echeveria Blue");
        assert_eq!(value["price"], serde_json::json!(12.5));
        assert_eq!(value["stock"], serde_json::json!(5));
        assert_eq!(value["image"], "/Moonstones Pachyphytum.png");
    }

    #[test]
    fn test_form_view_from_product_stringifies_numbers() {
        let product = Product {
            id: ProductId::new(1),
            name: "Ice Plant".to_string(),
            description: "Angular blue-green leaves.".to_string(),
            price: "7.25".parse().unwrap(),
            stock: 3,
            image: "/Ice Plant Corpuscularia Lehmannii.png".to_string(),
        };

        let view = FormView::from(product);
        assert_eq!(view.price, "7.25");
        assert_eq!(view.stock, "3");
    }

    #[test]
    fn test_empty_catalog_renders_empty_state() {
        let html = ProductsIndexTemplate { products: vec![] }.render().unwrap();
        assert!(html.contains("No products available at the moment."));
    }

    #[test]
    fn test_catalog_renders_cards() {
        let html = ProductsIndexTemplate {
            products: vec![ProductView {
                id: ProductId::new(2),
                name: "String of Pearls".to_string(),
                description: "Trailing strands of bead-like leaves.".to_string(),
                price: "9.99".parse().unwrap(),
                stock: 12,
                image: "/String Of Pearls.png".to_string(),
            }],
        }
        .render()
        .unwrap();

        assert!(html.contains("String of Pearls"));
        assert!(html.contains("$9.99"));
        assert!(html.contains("/products/2"));
        assert!(!html.contains("No products available at the moment."));
    }

    #[test]
    fn test_edit_template_carries_saving_label() {
        let html = ProductEditTemplate {
            id: ProductId::new(1),
            form: FormView::default(),
            error: None,
            images: IMAGE_OPTIONS,
        }
        .render()
        .unwrap();

        assert!(html.contains("Saving Changes..."));
        assert!(html.contains("Save Changes"));
    }

    #[test]
    fn test_edit_template_load_failure_message() {
        let html = ProductEditTemplate {
            id: ProductId::new(1),
            form: FormView::default(),
            error: Some(LOAD_FAILED.to_string()),
            images: IMAGE_OPTIONS,
        }
        .render()
        .unwrap();

        assert!(html.contains("Failed to load product. Please try again."));
        // Unpopulated form: no stray field values
        assert!(html.contains(r#"value="""#));
    }

    #[test]
    fn test_new_template_carries_adding_label() {
        let html = ProductNewTemplate {
            form: FormView::default(),
            error: None,
            images: IMAGE_OPTIONS,
        }
        .render()
        .unwrap();

        assert!(html.contains("Adding Product..."));
        assert!(html.contains("Add Product"));
    }

    #[test]
    fn test_new_template_preserves_entered_values_on_error() {
        let html = ProductNewTemplate {
            form: FormView::from(&filled_form()),
            error: Some(ADD_FAILED.to_string()),
            images: IMAGE_OPTIONS,
        }
        .render()
        .unwrap();

        assert!(html.contains("Failed to add product. Please try again."));
        assert!(html.contains("Echeveria Blue"));
        assert!(html.contains("12.50"));
    }
}
