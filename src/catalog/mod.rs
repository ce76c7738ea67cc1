//! # Product Catalog Module
//!
//! Persistence mapping for the `products` table.
//!
//! - `model` - wire and row representation of a product
//! - `mapper` - statement templates and positional parameters
//! - `store` - pooled record store adapter

pub mod mapper;
pub mod model;
pub mod store;

pub use mapper::Param;
pub use model::{InputError, Product, ProductInput};
pub use store::{MutationOutcome, ProductStore, SqlProductStore, StoreError, StoreResult};
