use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, StorageError};
use crate::store::{Row, TabularStore};

struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// In-process [`TabularStore`] backend.
///
/// Used by the test suite and by the `memory` store backend for local
/// development without a spreadsheet service. Mirrors the remote store's
/// semantics: insertion-ordered rows, header-keyed string cells, absent
/// cells reading as empty strings.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TabularStore for MemoryStore {
    async fn ensure_table(&self, name: &str, headers: &[&str]) -> Result<()> {
        let mut tables = self.tables.lock().expect("store lock poisoned");
        tables.entry(name.to_string()).or_insert_with(|| Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        });
        Ok(())
    }

    async fn read_all(&self, table: &str) -> Result<Vec<Row>> {
        let tables = self.tables.lock().expect("store lock poisoned");
        let table = tables
            .get(table)
            .ok_or_else(|| StorageError::UnknownTable(table.to_string()))?;

        let rows = table
            .rows
            .iter()
            .map(|cells| {
                table
                    .headers
                    .iter()
                    .zip(cells.iter())
                    .filter(|(_, cell)| !cell.is_empty())
                    .map(|(header, cell)| (header.clone(), cell.clone()))
                    .collect()
            })
            .collect();

        Ok(rows)
    }

    async fn append_row(&self, table: &str, fields: &Row) -> Result<()> {
        let mut tables = self.tables.lock().expect("store lock poisoned");
        let table = tables
            .get_mut(table)
            .ok_or_else(|| StorageError::UnknownTable(table.to_string()))?;

        let cells = table
            .headers
            .iter()
            .map(|header| fields.get(header).cloned().unwrap_or_default())
            .collect();
        table.rows.push(cells);

        Ok(())
    }

    async fn update_row(&self, table: &str, index: usize, fields: &Row) -> Result<()> {
        let mut tables = self.tables.lock().expect("store lock poisoned");
        let table = tables
            .get_mut(table)
            .ok_or_else(|| StorageError::UnknownTable(table.to_string()))?;

        let headers = table.headers.clone();
        let row = table.rows.get_mut(index).ok_or(StorageError::NotFound)?;

        for (position, header) in headers.iter().enumerate() {
            if let Some(value) = fields.get(header) {
                row[position] = value.clone();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_ensure_table_is_idempotent() {
        let store = MemoryStore::new();
        store.ensure_table("t", &["a", "b"]).await.unwrap();
        store.append_row("t", &row(&[("a", "1")])).await.unwrap();
        store.ensure_table("t", &["a", "b"]).await.unwrap();

        assert_eq!(store.read_all("t").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_absent_cells_read_as_missing() {
        let store = MemoryStore::new();
        store.ensure_table("t", &["a", "b"]).await.unwrap();
        store.append_row("t", &row(&[("a", "x")])).await.unwrap();

        let rows = store.read_all("t").await.unwrap();
        assert_eq!(rows[0].get("a").map(String::as_str), Some("x"));
        assert_eq!(rows[0].get("b"), None);
    }

    #[tokio::test]
    async fn test_update_overwrites_only_named_fields() {
        let store = MemoryStore::new();
        store.ensure_table("t", &["a", "b"]).await.unwrap();
        store
            .append_row("t", &row(&[("a", "1"), ("b", "2")]))
            .await
            .unwrap();
        store
            .update_row("t", 0, &row(&[("b", "9")]))
            .await
            .unwrap();

        let rows = store.read_all("t").await.unwrap();
        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "9");
    }

    #[tokio::test]
    async fn test_update_out_of_range_is_not_found() {
        let store = MemoryStore::new();
        store.ensure_table("t", &["a"]).await.unwrap();

        let err = store.update_row("t", 0, &row(&[("a", "1")])).await;
        assert!(matches!(err, Err(StorageError::NotFound)));
    }

    #[tokio::test]
    async fn test_unknown_table_errors() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.read_all("missing").await,
            Err(StorageError::UnknownTable(_))
        ));
    }
}
