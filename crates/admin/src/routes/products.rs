//! Product CRUD route handlers.
//!
//! Create and update accept multipart forms so the image can arrive
//! either as a pasted URL or as an uploaded file; uploads are embedded
//! as `data:` URLs, so the store stays self-contained.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::instrument;

use calabash_core::ProductId;
use calabash_store::records::{Product, ProductForm};
use calabash_store::CatalogError;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Product table row display data.
#[derive(Clone)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: String,
    pub availability: String,
    pub in_stock: bool,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: format!("{} {}", product.currency, product.price),
            availability: product.availability.label().to_string(),
            in_stock: product.availability.is_in_stock(),
        }
    }
}

/// Values used to (re)fill the product form.
#[derive(Clone, Default)]
pub struct ProductFormView {
    pub name: String,
    pub category: String,
    pub price: String,
    pub currency: String,
    pub in_stock: bool,
    pub image_url: String,
}

impl From<&ProductForm> for ProductFormView {
    fn from(form: &ProductForm) -> Self {
        Self {
            name: form.name.clone(),
            category: form.category.clone(),
            price: form.price.clone(),
            currency: form.currency.clone(),
            in_stock: form.availability.is_in_stock(),
            image_url: form.image.clone(),
        }
    }
}

/// Product table page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductRow>,
    pub dark_mode: bool,
}

/// Product create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub title: String,
    pub action: String,
    pub submit_label: String,
    pub form: ProductFormView,
    pub error: Option<String>,
    pub dark_mode: bool,
}

/// Display the product table.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<ProductsIndexTemplate> {
    let products = state.catalog().list()?;
    let dark_mode = state.prefs().dark_mode()?;

    Ok(ProductsIndexTemplate {
        products: products.iter().map(ProductRow::from).collect(),
        dark_mode,
    })
}

/// Display the create form.
#[instrument(skip(state))]
pub async fn new(State(state): State<AppState>) -> Result<ProductFormTemplate> {
    Ok(ProductFormTemplate {
        title: "Add New Product".to_string(),
        action: "/products".to_string(),
        submit_label: "Add Product".to_string(),
        form: ProductFormView::default(),
        error: None,
        dark_mode: state.prefs().dark_mode()?,
    })
}

/// Create a product from the submitted form.
#[instrument(skip(state, multipart))]
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> Result<Response> {
    let form = read_product_form(multipart).await?;

    match state.catalog().create(&form) {
        Ok(product) => {
            tracing::info!(id = %product.id, "product created via admin form");
            Ok(Redirect::to("/products").into_response())
        }
        Err(e @ CatalogError::MissingFields(_)) => {
            Ok(ProductFormTemplate {
                title: "Add New Product".to_string(),
                action: "/products".to_string(),
                submit_label: "Add Product".to_string(),
                form: ProductFormView::from(&form),
                error: Some(e.to_string()),
                dark_mode: state.prefs().dark_mode()?,
            }
            .into_response())
        }
        Err(CatalogError::Store(e)) => Err(e.into()),
    }
}

/// Display the edit form for an existing product.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ProductFormTemplate> {
    let product = state
        .catalog()
        .get(ProductId::new(id))?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductFormTemplate {
        title: "Edit Product".to_string(),
        action: format!("/products/{id}"),
        submit_label: "Update Product".to_string(),
        form: ProductFormView {
            name: product.name,
            category: product.category,
            price: product.price,
            currency: product.currency,
            in_stock: product.availability.is_in_stock(),
            image_url: product.image,
        },
        error: None,
        dark_mode: state.prefs().dark_mode()?,
    })
}

/// Apply the submitted form to an existing product.
///
/// A product deleted in the meantime makes this a silent no-op; the
/// redirect back to the table shows the current state either way.
#[instrument(skip(state, multipart))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Response> {
    let form = read_product_form(multipart).await?;

    match state.catalog().update(ProductId::new(id), &form) {
        Ok(_) => Ok(Redirect::to("/products").into_response()),
        Err(e @ CatalogError::MissingFields(_)) => {
            Ok(ProductFormTemplate {
                title: "Edit Product".to_string(),
                action: format!("/products/{id}"),
                submit_label: "Update Product".to_string(),
                form: ProductFormView::from(&form),
                error: Some(e.to_string()),
                dark_mode: state.prefs().dark_mode()?,
            }
            .into_response())
        }
        Err(CatalogError::Store(e)) => Err(e.into()),
    }
}

/// Delete a product. Deleting an already-deleted id is a no-op.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Redirect> {
    state.catalog().delete(ProductId::new(id))?;
    Ok(Redirect::to("/products"))
}

/// Read a `ProductForm` out of a multipart submission.
///
/// An uploaded image file takes precedence over a pasted URL.
async fn read_product_form(mut multipart: Multipart) -> Result<ProductForm> {
    let mut form = ProductForm::default();
    let mut image_url = String::new();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?
    {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if name == "image_file" {
            let content_type = field
                .content_type()
                .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("unreadable upload: {e}")))?;
            if !data.is_empty() {
                upload = Some((content_type, data.to_vec()));
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(format!("invalid form data: {e}")))?;
        match name.as_str() {
            "name" => form.name = value,
            "category" => form.category = value,
            "price" => form.price = value,
            "currency" => form.currency = value,
            "availability" => form.availability = value.parse().unwrap_or_default(),
            "image_url" => image_url = value,
            _ => {}
        }
    }

    form.image = match upload {
        Some((content_type, data)) => {
            format!("data:{content_type};base64,{}", BASE64.encode(data))
        }
        None => image_url,
    };
    Ok(form)
}
