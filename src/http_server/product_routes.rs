//! Product HTTP Routes
//!
//! Create, list, get, update and delete over the products table. Each handler
//! issues exactly one store statement. Not-found is decided from the row or
//! affected-row count the store reports, never from a separate lookup.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info};

use crate::catalog::{Product, ProductInput, ProductStore};
use crate::rest_api::{ApiError, ApiResult, MessageResponse, Operation};

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub store: Arc<dyn ProductStore>,
}

impl CatalogState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn product_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    let Path(id) = path.map_err(|rejection| ApiError::InvalidId(rejection.body_text()))?;
    Ok(id)
}

fn product_input(body: Result<Json<ProductInput>, JsonRejection>) -> ApiResult<ProductInput> {
    let Json(input) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    input.validate()?;
    Ok(input)
}

// ==================
// Handlers
// ==================

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid product input", body = crate::rest_api::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::rest_api::ErrorResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<Arc<CatalogState>>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let input = product_input(body)?;

    let outcome = state
        .store
        .insert(&input)
        .await
        .map_err(|e| ApiError::store(Operation::Create, e))?;

    info!(product_id = outcome.last_insert_id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(Product::from_input(outcome.last_insert_id, input)),
    ))
}

/// List every product
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Store failure", body = crate::rest_api::ErrorResponse)
    )
)]
pub async fn list_products_handler(
    State(state): State<Arc<CatalogState>>,
) -> ApiResult<Json<Vec<Product>>> {
    let products = state
        .store
        .select_all()
        .await
        .map_err(|e| ApiError::store(Operation::List, e))?;

    debug!(count = products.len(), "products listed");
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 400, description = "Invalid product id", body = crate::rest_api::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::rest_api::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::rest_api::ErrorResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let id = product_id(path)?;

    let product = state
        .store
        .select_by_id(id)
        .await
        .map_err(|e| ApiError::store(Operation::Get, e))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(product))
}

/// Replace a product.
///
/// This is a full replacement, not a merge: optional fields missing from the
/// body are stored as null.
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product replaced", body = Product),
        (status = 400, description = "Invalid product id or input", body = crate::rest_api::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::rest_api::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::rest_api::ErrorResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let id = product_id(path)?;
    let input = product_input(body)?;

    let outcome = state
        .store
        .update_by_id(id, &input)
        .await
        .map_err(|e| ApiError::store(Operation::Update, e))?;

    if outcome.is_empty() {
        return Err(ApiError::NotFound);
    }

    info!(product_id = id, "product replaced");
    Ok(Json(Product::from_input(id, input)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Invalid product id", body = crate::rest_api::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::rest_api::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::rest_api::ErrorResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<Arc<CatalogState>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = product_id(path)?;

    let outcome = state
        .store
        .delete_by_id(id)
        .await
        .map_err(|e| ApiError::store(Operation::Delete, e))?;

    if outcome.is_empty() {
        return Err(ApiError::NotFound);
    }

    info!(product_id = id, "product deleted");
    Ok(Json(MessageResponse::product_deleted()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SqlProductStore;

    async fn state() -> State<Arc<CatalogState>> {
        let store = SqlProductStore::in_memory().await.unwrap();
        State(Arc::new(CatalogState::new(Arc::new(store))))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let State(shared) = state().await;

        let (status, Json(created)) = create_product_handler(
            State(shared.clone()),
            Ok(Json(ProductInput::new("Chair", 49.99))),
        )
        .await
        .unwrap();
        let Json(fetched) = get_product_handler(State(shared), Ok(Path(created.id)))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_before_store() {
        let State(shared) = state().await;

        let err = create_product_handler(
            State(shared.clone()),
            Ok(Json(ProductInput::new("", 1.0))),
        )
        .await
        .unwrap_err();
        let Json(products) = list_products_handler(State(shared)).await.unwrap();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let State(shared) = state().await;

        let get = get_product_handler(State(shared.clone()), Ok(Path(5))).await;
        let update = update_product_handler(
            State(shared.clone()),
            Ok(Path(5)),
            Ok(Json(ProductInput::new("Chair", 1.0))),
        )
        .await;
        let delete = delete_product_handler(State(shared), Ok(Path(5))).await;

        assert!(matches!(get, Err(ApiError::NotFound)));
        assert!(matches!(update, Err(ApiError::NotFound)));
        assert!(matches!(delete, Err(ApiError::NotFound)));
    }
}
