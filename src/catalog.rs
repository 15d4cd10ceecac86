//! Table and column lookups against a host catalog.
//!
//! The numeric kernels never touch this module; it exists for callers
//! that validate their inputs by name before materializing arrays.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::models::common::{LinalgError, Result};

pub trait CatalogPort: Send + Sync {
    /// `name` is either `table` (resolved through the search path) or
    /// `schema.table`.
    fn table_exists(&self, name: &str) -> bool;

    fn column_exists(&self, table: &str, column: &str) -> bool;

    /// Schema that `name` resolves to, if the table exists.
    fn resolve_schema(&self, name: &str) -> Option<String>;
}

// Unquoted identifiers fold to lower case.
fn fold(ident: &str) -> String {
    ident.trim().to_ascii_lowercase()
}

/// Splits `table` or `schema.table`. Returns `None` for anything else,
/// including empty parts and three-part names.
fn split_qualified(name: &str) -> Option<(Option<String>, String)> {
    let mut parts = name.split('.').map(fold);
    let (first, second) = (parts.next()?, parts.next());
    if parts.next().is_some() || first.is_empty() {
        return None;
    }
    match second {
        Some(table) if table.is_empty() => None,
        Some(table) => Some((Some(first), table)),
        None => Some((None, first)),
    }
}

/// Catalog kept in process memory, keyed by `(schema, table)`.
pub struct InMemoryCatalog {
    tables: RwLock<HashMap<(String, String), Vec<String>>>,
    search_path: Vec<String>,
}

impl InMemoryCatalog {
    pub fn new<S: AsRef<str>>(search_path: &[S]) -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            search_path: search_path.iter().map(|s| fold(s.as_ref())).collect(),
        }
    }

    /// Registers (or replaces) `schema.table` with the given columns.
    pub fn create_table<S: AsRef<str>>(&self, schema: &str, table: &str, columns: &[S]) {
        let columns = columns.iter().map(|c| fold(c.as_ref())).collect();
        self.tables
            .write()
            .insert((fold(schema), fold(table)), columns);
    }

    pub fn drop_table(&self, schema: &str, table: &str) -> bool {
        self.tables
            .write()
            .remove(&(fold(schema), fold(table)))
            .is_some()
    }

    fn lookup(&self, name: &str) -> Option<(String, String)> {
        let (schema, table) = split_qualified(name)?;
        let tables = self.tables.read();
        match schema {
            Some(schema) => {
                let key = (schema, table);
                tables.contains_key(&key).then_some(key)
            }
            None => self
                .search_path
                .iter()
                .map(|schema| (schema.clone(), table.clone()))
                .find(|key| tables.contains_key(key)),
        }
    }
}

impl CatalogPort for InMemoryCatalog {
    fn table_exists(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    fn column_exists(&self, table: &str, column: &str) -> bool {
        let Some(key) = self.lookup(table) else {
            return false;
        };
        let column = fold(column);
        self.tables
            .read()
            .get(&key)
            .map_or(false, |columns| columns.contains(&column))
    }

    fn resolve_schema(&self, name: &str) -> Option<String> {
        self.lookup(name).map(|(schema, _)| schema)
    }
}

pub fn assert_table_exists<C: CatalogPort + ?Sized>(catalog: &C, name: &str) -> Result<()> {
    if catalog.table_exists(name) {
        Ok(())
    } else {
        log::debug!("table '{}' not found in catalog", name);
        Err(LinalgError::InvalidInput(format!(
            "table '{}' does not exist",
            name
        )))
    }
}

pub fn assert_column_exists<C: CatalogPort + ?Sized>(
    catalog: &C,
    table: &str,
    column: &str,
) -> Result<()> {
    assert_table_exists(catalog, table)?;
    if catalog.column_exists(table, column) {
        Ok(())
    } else {
        let schema = catalog.resolve_schema(table).unwrap_or_default();
        let bare = split_qualified(table).map_or_else(|| fold(table), |(_, bare)| bare);
        Err(LinalgError::InvalidInput(format!(
            "column '{}' does not exist in table '{}.{}'",
            column, schema, bare
        )))
    }
}
