//! # Record Store Adapter
//!
//! Executes the product statement templates against a pooled SQLite
//! connection. The pool is created once per process and shared by every
//! request; each operation issues exactly one statement.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteQueryResult};
use thiserror::Error;
use tracing::debug;

use super::mapper::{
    bind_all, to_parameters, update_parameters, CREATE_PRODUCTS_TABLE, DELETE_PRODUCT_BY_ID,
    INSERT_PRODUCT, SELECT_ALL_PRODUCTS, SELECT_PRODUCT_BY_ID, UPDATE_PRODUCT_BY_ID,
};
use super::model::{Product, ProductInput};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connectivity, constraint or driver-level failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// What a write statement reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    pub rows_affected: u64,
    /// Row id generated by the last insert on the connection
    pub last_insert_id: i64,
}

impl MutationOutcome {
    /// True when the statement matched no row.
    pub fn is_empty(&self) -> bool {
        self.rows_affected == 0
    }
}

impl From<SqliteQueryResult> for MutationOutcome {
    fn from(result: SqliteQueryResult) -> Self {
        Self {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_rowid(),
        }
    }
}

/// Product persistence operations, one statement each.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new product; the outcome carries the generated id.
    async fn insert(&self, input: &ProductInput) -> StoreResult<MutationOutcome>;

    /// All products in id order.
    async fn select_all(&self) -> StoreResult<Vec<Product>>;

    /// A single product, or `None` when no row matches.
    async fn select_by_id(&self, id: i64) -> StoreResult<Option<Product>>;

    /// Overwrite every mutable column of the row with the given id.
    async fn update_by_id(&self, id: i64, input: &ProductInput) -> StoreResult<MutationOutcome>;

    /// Remove the row with the given id.
    async fn delete_by_id(&self, id: i64) -> StoreResult<MutationOutcome>;
}

/// SQLite-backed product store
#[derive(Debug, Clone)]
pub struct SqlProductStore {
    pool: SqlitePool,
}

impl SqlProductStore {
    /// Open a pool against `url`, creating the database file if needed.
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        debug!(url, max_connections, "record store pool opened");
        Ok(Self { pool })
    }

    /// Private in-memory database with the products table already created.
    ///
    /// Every SQLite memory connection is its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the products table if it does not exist yet.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_PRODUCTS_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for SqlProductStore {
    async fn insert(&self, input: &ProductInput) -> StoreResult<MutationOutcome> {
        let result = bind_all(sqlx::query(INSERT_PRODUCT), to_parameters(input))
            .execute(&self.pool)
            .await?;
        Ok(result.into())
    }

    async fn select_all(&self) -> StoreResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, Product>(SELECT_ALL_PRODUCTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let row = sqlx::query_as::<_, Product>(SELECT_PRODUCT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_by_id(&self, id: i64, input: &ProductInput) -> StoreResult<MutationOutcome> {
        let result = bind_all(
            sqlx::query(UPDATE_PRODUCT_BY_ID),
            update_parameters(input, id),
        )
        .execute(&self.pool)
        .await?;
        Ok(result.into())
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<MutationOutcome> {
        let result = sqlx::query(DELETE_PRODUCT_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.into())
    }
}
