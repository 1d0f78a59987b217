use std::collections::HashMap;

use crate::error::Result;

pub mod memory;
pub mod sheets;

/// One data row of a table: cells keyed by header name.
///
/// All cells are logically strings; an absent cell is equivalent to an
/// empty string. Typed interpretation happens in the schema mapper, never
/// here.
pub type Row = HashMap<String, String>;

/// Boundary contract for the external spreadsheet-style store.
///
/// Tables are identified by a single string name. Rows keep their insertion
/// order, and `read_all` returns them in that order; `update_row` addresses
/// a row by its 0-based index within that same order.
#[async_trait::async_trait]
pub trait TabularStore: Send + Sync {
    /// Get-or-create a named table with the given header columns.
    /// Idempotent: an already existing table is not an error.
    async fn ensure_table(&self, name: &str, headers: &[&str]) -> Result<()>;

    /// All data rows of the table, in storage order.
    async fn read_all(&self, table: &str) -> Result<Vec<Row>>;

    /// Append one row. Headers absent from `fields` are written empty.
    async fn append_row(&self, table: &str, fields: &Row) -> Result<()>;

    /// Overwrite the named fields of the data row at `index`, save.
    /// Fields not named keep their stored value.
    async fn update_row(&self, table: &str, index: usize, fields: &Row) -> Result<()>;
}
