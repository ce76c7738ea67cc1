//! Interface Description
//!
//! The OpenAPI document is derived from the `#[utoipa::path]` annotations on
//! the product handlers and the schema types, so it cannot drift from the
//! route table.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

use super::product_routes;
use crate::catalog::{Product, ProductInput};
use crate::rest_api::{ErrorResponse, MessageResponse};

/// Path the generated document is served at
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Path of the browsable documentation page
pub const DOCS_UI_PATH: &str = "/api-docs";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "E-commerce Product API",
        version = "1.0.0",
        description = "API documentation for the E-commerce Product API"
    ),
    servers((url = "http://localhost:3000")),
    paths(
        product_routes::create_product_handler,
        product_routes::list_products_handler,
        product_routes::get_product_handler,
        product_routes::update_product_handler,
        product_routes::delete_product_handler
    ),
    components(schemas(Product, ProductInput, MessageResponse, ErrorResponse)),
    tags((name = "Products", description = "Product catalog operations"))
)]
pub struct ApiDoc;

/// Routes serving the generated document and a RapiDoc page that renders it
pub fn docs_routes() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_handler))
        .merge(RapiDoc::new(OPENAPI_PATH).path(DOCS_UI_PATH))
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// The document as pretty-printed JSON
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn document() -> Value {
        serde_json::from_str(&openapi_json().unwrap()).unwrap()
    }

    #[test]
    fn test_document_lists_product_operations() {
        let doc = document();
        let paths = doc["paths"].as_object().unwrap();

        assert_eq!(paths.len(), 2);

        let collection = paths["/products"].as_object().unwrap();
        assert!(collection.contains_key("get"));
        assert!(collection.contains_key("post"));

        let item = paths["/products/{id}"].as_object().unwrap();
        assert!(item.contains_key("get"));
        assert!(item.contains_key("put"));
        assert!(item.contains_key("delete"));
    }

    #[test]
    fn test_input_schema_requires_name_and_price() {
        let doc = document();
        let required = doc["components"]["schemas"]["ProductInput"]["required"]
            .as_array()
            .unwrap();

        let mut required: Vec<&str> = required.iter().filter_map(Value::as_str).collect();
        required.sort_unstable();
        assert_eq!(required, vec!["name", "price"]);
    }

    #[test]
    fn test_info_block() {
        let doc = document();
        assert_eq!(doc["info"]["title"], "E-commerce Product API");
        assert_eq!(doc["info"]["version"], "1.0.0");
    }
}
