use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, StorageError};
use crate::store::{Row, TabularStore};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Google Sheets v4 backend: one spreadsheet document, with each named
/// table stored as a tab inside it. Row 1 of every tab is the header row.
///
/// Authentication is a bearer token supplied by the caller; obtaining and
/// refreshing it is outside this crate's scope.
pub struct SheetsStore {
    spreadsheet_id: String,
    token: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl SheetsStore {
    pub fn new(spreadsheet_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_base_url(spreadsheet_id, token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        spreadsheet_id: impl Into<String>,
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            token: token.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn doc_url(&self) -> String {
        format!("{}/{}", self.base_url, self.spreadsheet_id)
    }

    /// A1 range covering a whole tab, with the title quoted for the API.
    fn tab_range(table: &str) -> String {
        format!("'{}'", table.replace('\'', "''"))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StorageError::Store(format!("{status}: {body}")))
    }

    async fn tab_titles(&self) -> Result<Vec<String>> {
        let url = format!("{}?fields=sheets.properties.title", self.doc_url());
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let meta = Self::check(response).await?.json::<SpreadsheetMeta>().await?;

        Ok(meta.sheets.into_iter().map(|s| s.properties.title).collect())
    }

    async fn read_range(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let url = format!("{}/values/{}", self.doc_url(), range);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let values = Self::check(response).await?.json::<ValueRange>().await?;

        Ok(values.values)
    }

    async fn write_range(&self, range: &str, rows: Vec<Vec<String>>) -> Result<()> {
        let url = format!(
            "{}/values/{}?valueInputOption=RAW",
            self.doc_url(),
            range
        );
        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": rows }))
            .send()
            .await?;
        Self::check(response).await?;

        Ok(())
    }

    async fn add_tab(&self, table: &str) -> Result<()> {
        let url = format!("{}:batchUpdate", self.doc_url());
        let body = json!({
            "requests": [{ "addSheet": { "properties": { "title": table } } }]
        });
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        match Self::check(response).await {
            Ok(_) => Ok(()),
            // Concurrent provisioning of the same user's tables can lose
            // the creation race; the tab being there is what matters.
            Err(StorageError::Store(msg)) if msg.contains("already exists") => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Header row of a tab, as stored.
    async fn headers(&self, table: &str) -> Result<Vec<String>> {
        let range = format!("{}!1:1", Self::tab_range(table));
        let mut rows = self.read_range(&range).await?;
        if rows.is_empty() {
            return Err(StorageError::UnknownTable(table.to_string()));
        }

        Ok(rows.remove(0))
    }
}

#[async_trait::async_trait]
impl TabularStore for SheetsStore {
    async fn ensure_table(&self, name: &str, headers: &[&str]) -> Result<()> {
        if self.tab_titles().await?.iter().any(|t| t == name) {
            return Ok(());
        }

        self.add_tab(name).await?;

        let header_row = headers.iter().map(|h| h.to_string()).collect();
        let range = format!("{}!A1", Self::tab_range(name));
        self.write_range(&range, vec![header_row]).await
    }

    async fn read_all(&self, table: &str) -> Result<Vec<Row>> {
        let mut rows = self.read_range(&Self::tab_range(table)).await?;
        if rows.is_empty() {
            return Err(StorageError::UnknownTable(table.to_string()));
        }
        let headers = rows.remove(0);

        Ok(rows
            .into_iter()
            .map(|cells| {
                headers
                    .iter()
                    .zip(cells)
                    .filter(|(_, cell)| !cell.is_empty())
                    .map(|(header, cell)| (header.clone(), cell))
                    .collect()
            })
            .collect())
    }

    async fn append_row(&self, table: &str, fields: &Row) -> Result<()> {
        let headers = self.headers(table).await?;
        let cells: Vec<String> = headers
            .iter()
            .map(|header| fields.get(header).cloned().unwrap_or_default())
            .collect();

        let url = format!(
            "{}/values/{}:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS",
            self.doc_url(),
            Self::tab_range(table)
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": [cells] }))
            .send()
            .await?;
        Self::check(response).await?;

        Ok(())
    }

    async fn update_row(&self, table: &str, index: usize, fields: &Row) -> Result<()> {
        let headers = self.headers(table).await?;

        // Data rows start below the header: data index 0 is sheet row 2.
        let sheet_row = index + 2;
        let row_range = format!("{t}!{r}:{r}", t = Self::tab_range(table), r = sheet_row);
        let mut stored = self
            .read_range(&row_range)
            .await?
            .into_iter()
            .next()
            .ok_or(StorageError::NotFound)?;
        stored.resize(headers.len(), String::new());

        for (position, header) in headers.iter().enumerate() {
            if let Some(value) = fields.get(header) {
                stored[position] = value.clone();
            }
        }

        let target = format!("{t}!A{r}", t = Self::tab_range(table), r = sheet_row);
        self.write_range(&target, vec![stored]).await
    }
}
