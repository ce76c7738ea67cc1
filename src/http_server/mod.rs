//! # Product Catalog HTTP Server Module
//!
//! Combines all endpoint routers into a single Axum server.
//!
//! # Endpoints
//!
//! - `/` - Welcome text
//! - `/health` - Health check
//! - `/products`, `/products/{id}` - Product CRUD
//! - `/api-docs` - Browsable API documentation
//! - `/api-docs/openapi.json` - Generated OpenAPI document

pub mod config;
pub mod observability_routes;
pub mod openapi;
pub mod product_routes;
pub mod server;

pub use config::{ConfigError, ConfigOverrides, HttpServerConfig};
pub use openapi::{openapi_json, ApiDoc, DOCS_UI_PATH, OPENAPI_PATH};
pub use product_routes::CatalogState;
pub use server::{build_router, HttpServer};
