//! product-catalog - An HTTP product catalog backed by a relational store
//!
//! Create, list, get, update and delete over a single `products` table, with
//! a generated OpenAPI description of the interface.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod rest_api;
