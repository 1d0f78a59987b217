use anyhow::{Context, Result, bail};

#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Sheets,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store_backend: StoreBackend,
    pub spreadsheet_id: String,
    pub sheets_token: String,
    pub sheets_base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_backend = match std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "sheets".to_string())
            .as_str()
        {
            "sheets" => StoreBackend::Sheets,
            "memory" => StoreBackend::Memory,
            other => bail!("Unknown STORE_BACKEND: {other}"),
        };

        let (spreadsheet_id, sheets_token) = if store_backend == StoreBackend::Sheets {
            (
                std::env::var("SHEETS_SPREADSHEET_ID")
                    .context("Cannot load SHEETS_SPREADSHEET_ID env variable")?,
                std::env::var("SHEETS_API_TOKEN")
                    .context("Cannot load SHEETS_API_TOKEN env variable")?,
            )
        } else {
            (String::new(), String::new())
        };

        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            store_backend,
            spreadsheet_id,
            sheets_token,
            sheets_base_url: std::env::var("SHEETS_BASE_URL").ok(),
        })
    }
}
