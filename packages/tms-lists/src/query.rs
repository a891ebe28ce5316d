//! Deferred list reads.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::{header_map, send};
use crate::Error;

/// A read bound to a fixed URL. Nothing is sent until [`ReadQuery::fetch`];
/// every fetch is an independent GET.
#[derive(Debug, Clone)]
pub struct ReadQuery {
    http: reqwest::Client,
    url: String,
}

impl ReadQuery {
    pub(crate) fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the URL and return the `value` array of the response.
    pub async fn fetch(&self) -> Result<Vec<Value>, Error> {
        let headers = header_map(tms_odata::read_headers())?;
        let request = self.http.get(&self.url).headers(headers);
        let body = send(request).await.inspect_err(|e| {
            warn!(url = %self.url, error = %e, "List read failed");
        })?;

        let decoded: Value = serde_json::from_str(&body)
            .map_err(|e| Error::Decode(format!("read response is not JSON: {e}")))?;
        let rows = tms_odata::unwrap_collection(decoded)?;
        debug!(url = %self.url, rows = rows.len(), "List read");
        Ok(rows)
    }

    /// Like [`ReadQuery::fetch`], decoding each row into `T`.
    pub async fn fetch_as<T: DeserializeOwned>(&self) -> Result<Vec<T>, Error> {
        self.fetch()
            .await?
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                serde_json::from_value(row)
                    .map_err(|e| Error::Decode(format!("row {i} does not match: {e}")))
            })
            .collect()
    }
}
