//! # Product Mapper
//!
//! Statement templates for the `products` table and the positional
//! parameters bound into them. User input only ever reaches SQL through
//! `bind`; templates are fixed strings.

use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;

use super::model::ProductInput;

pub const CREATE_PRODUCTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    location TEXT,
    material TEXT,
    size TEXT,
    weight REAL,
    rating REAL,
    stock INTEGER,
    total_sold INTEGER,
    tax REAL,
    price REAL NOT NULL,
    description TEXT
)";

pub const INSERT_PRODUCT: &str = "INSERT INTO products \
    (name, location, material, size, weight, rating, stock, total_sold, tax, price, description) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

pub const SELECT_ALL_PRODUCTS: &str = "SELECT \
    id, name, location, material, size, weight, rating, stock, total_sold, tax, price, description \
    FROM products ORDER BY id";

pub const SELECT_PRODUCT_BY_ID: &str = "SELECT \
    id, name, location, material, size, weight, rating, stock, total_sold, tax, price, description \
    FROM products WHERE id = ?";

pub const UPDATE_PRODUCT_BY_ID: &str = "UPDATE products SET \
    name = ?, location = ?, material = ?, size = ?, weight = ?, rating = ?, \
    stock = ?, total_sold = ?, tax = ?, price = ?, description = ? \
    WHERE id = ?";

pub const DELETE_PRODUCT_BY_ID: &str = "DELETE FROM products WHERE id = ?";

/// Number of mutable product columns.
pub const FIELD_COUNT: usize = 11;

/// A single positional statement parameter. `None` binds as NULL.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Text(Option<String>),
    Real(Option<f64>),
    Integer(Option<i64>),
}

/// Parameters for [`INSERT_PRODUCT`], in column order.
pub fn to_parameters(input: &ProductInput) -> [Param; FIELD_COUNT] {
    [
        Param::Text(Some(input.name.clone())),
        Param::Text(input.location.clone()),
        Param::Text(input.material.clone()),
        Param::Text(input.size.clone()),
        Param::Real(input.weight),
        Param::Real(input.rating),
        Param::Integer(input.stock),
        Param::Integer(input.total_sold),
        Param::Real(input.tax),
        Param::Real(Some(input.price)),
        Param::Text(input.description.clone()),
    ]
}

/// Parameters for [`UPDATE_PRODUCT_BY_ID`]: every mutable column followed by
/// the target id.
pub fn update_parameters(input: &ProductInput, id: i64) -> Vec<Param> {
    let mut params = Vec::with_capacity(FIELD_COUNT + 1);
    params.extend(to_parameters(input));
    params.push(Param::Integer(Some(id)));
    params
}

/// Bind parameters onto a statement in order.
pub fn bind_all<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: impl IntoIterator<Item = Param>,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            Param::Text(value) => query.bind(value),
            Param::Real(value) => query.bind(value),
            Param::Integer(value) => query.bind(value),
        };
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(template: &str) -> usize {
        template.matches('?').count()
    }

    #[test]
    fn test_parameter_order() {
        let mut input = ProductInput::new("Chair", 49.99);
        input.location = Some("Jakarta".to_string());
        input.stock = Some(7);
        input.description = Some("Oak".to_string());

        let params = to_parameters(&input);

        assert_eq!(params[0], Param::Text(Some("Chair".to_string())));
        assert_eq!(params[1], Param::Text(Some("Jakarta".to_string())));
        assert_eq!(params[6], Param::Integer(Some(7)));
        assert_eq!(params[9], Param::Real(Some(49.99)));
        assert_eq!(params[10], Param::Text(Some("Oak".to_string())));
    }

    #[test]
    fn test_absent_fields_bind_as_null() {
        let params = to_parameters(&ProductInput::new("Chair", 1.0));

        assert_eq!(params[2], Param::Text(None));
        assert_eq!(params[4], Param::Real(None));
        assert_eq!(params[7], Param::Integer(None));
        assert_eq!(params[8], Param::Real(None));
    }

    #[test]
    fn test_update_parameters_end_with_id() {
        let params = update_parameters(&ProductInput::new("Chair", 1.0), 42);

        assert_eq!(params.len(), FIELD_COUNT + 1);
        assert_eq!(params.last(), Some(&Param::Integer(Some(42))));
    }

    #[test]
    fn test_templates_placeholder_counts() {
        assert_eq!(placeholders(INSERT_PRODUCT), FIELD_COUNT);
        assert_eq!(placeholders(UPDATE_PRODUCT_BY_ID), FIELD_COUNT + 1);
        assert_eq!(placeholders(SELECT_PRODUCT_BY_ID), 1);
        assert_eq!(placeholders(DELETE_PRODUCT_BY_ID), 1);
        assert_eq!(placeholders(SELECT_ALL_PRODUCTS), 0);
    }
}
