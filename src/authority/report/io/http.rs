use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::authority::report::error::{ReportError, Result};
use crate::authority::report::model::LicenseRecord;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:30000";
/// Path of the endpoint listing every license.
pub const LICENSE_LIST_PATH: &str = "/drivers-licenses/list";

/// Connection settings for the license service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub base_url: String,
}

impl SourceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the license listing.
    pub fn list_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            LICENSE_LIST_PATH
        )
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Blocking client for the license service.
#[derive(Debug)]
pub struct LicenseSource {
    client: Client,
    config: SourceConfig,
}

impl LicenseSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Fetches the full license list.
    ///
    /// Any status other than `200 OK` is logged and yields an empty list, so
    /// callers cannot tell an empty registry from a failed request. Transport
    /// failures and malformed bodies are returned as errors.
    #[instrument(level = "info", skip_all, fields(url = %self.config.list_url()))]
    pub fn fetch_license_data(&self) -> Result<Vec<LicenseRecord>> {
        let response = self.client.get(self.config.list_url()).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "failed to fetch data from the license service");
            return Ok(Vec::new());
        }

        let body: Value = serde_json::from_slice(&response.bytes()?)?;
        let records = parse_license_list(body)?;
        info!(record_count = records.len(), "fetched license records");
        Ok(records)
    }
}

/// Decodes a response body into license records.
pub fn parse_license_list(body: Value) -> Result<Vec<LicenseRecord>> {
    let items = match body {
        Value::Array(items) => items,
        other => {
            return Err(ReportError::UnexpectedPayload(format!(
                "expected a JSON array, got {}",
                json_kind(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(LicenseRecord::new(fields)),
            other => Err(ReportError::UnexpectedPayload(format!(
                "entry {index} is {}, expected an object",
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
