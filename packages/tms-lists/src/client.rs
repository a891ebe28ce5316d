//! List client: deferred reads plus create / update / delete.
//!
//! Mutations are POSTs. Update and delete carry `X-HTTP-METHOD` and
//! `IF-MATCH: *`; every mutation carries the caller's `X-RequestDigest`.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tms_odata::{
    item_url, items_url, mutation_headers, ApiRoot, ItemId, ListId, ListQuery, RequestDigest, Verb,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::query::ReadQuery;
use crate::Error;

/// Client for one list API root. Cheap to clone; clones share the
/// connection pool.
#[derive(Debug, Clone)]
pub struct ListClient {
    http: reqwest::Client,
    root: ApiRoot,
}

impl ListClient {
    /// Build a client with the configured timeouts.
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| Error::Config(format!("HTTP client build failed: {e}")))?;

        info!(api = %config.api_url, "List client initialized");
        Ok(Self::with_http(ApiRoot::new(config.api_url.as_str()), http))
    }

    /// Use a caller-built transport (custom TLS, proxies, timeouts).
    pub fn with_http(root: ApiRoot, http: reqwest::Client) -> Self {
        Self { http, root }
    }

    pub fn root(&self) -> &ApiRoot {
        &self.root
    }

    /// Deferred read of `list` with the given fields.
    pub fn read(&self, list: &ListId, query: &ListQuery) -> ReadQuery {
        self.read_url(query.to_url(&self.root, list))
    }

    /// Deferred read of a prebuilt URL.
    pub fn read_url(&self, url: impl Into<String>) -> ReadQuery {
        ReadQuery::new(self.http.clone(), url.into())
    }

    /// Create an item. Returns the created item as the server echoes it:
    /// the verbose `d` object, the JSON body as is, the raw text when the
    /// body is not JSON, or `Value::Null` when there is no body.
    pub async fn create<P>(
        &self,
        list: &ListId,
        payload: &P,
        digest: &RequestDigest,
    ) -> Result<Value, Error>
    where
        P: Serialize + ?Sized,
    {
        let body = encode(payload)?;
        let response = self
            .mutate(Verb::Create, list, None, Some(body), digest)
            .await?;
        if response.trim().is_empty() {
            return Ok(Value::Null);
        }
        // The item exists once the server answered 2xx; an odd body is not a failure.
        let decoded: Value = match serde_json::from_str(&response) {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!(%list, error = %e, "Create response is not JSON, returning raw body");
                return Ok(Value::String(response));
            }
        };
        match tms_odata::unwrap_verbose(decoded.clone()) {
            Ok(item) => Ok(item),
            Err(_) => Ok(decoded),
        }
    }

    /// Merge `payload` into an existing item. Fields not in the payload are
    /// left untouched; concurrent writers race (last writer wins).
    pub async fn update<P>(
        &self,
        list: &ListId,
        item: ItemId,
        payload: &P,
        digest: &RequestDigest,
    ) -> Result<(), Error>
    where
        P: Serialize + ?Sized,
    {
        let body = encode(payload)?;
        self.mutate(Verb::Merge, list, Some(item), Some(body), digest)
            .await
            .map(drop)
    }

    pub async fn delete(
        &self,
        list: &ListId,
        item: ItemId,
        digest: &RequestDigest,
    ) -> Result<(), Error> {
        self.mutate(Verb::Delete, list, Some(item), None, digest)
            .await
            .map(drop)
    }

    async fn mutate(
        &self,
        verb: Verb,
        list: &ListId,
        item: Option<ItemId>,
        body: Option<Vec<u8>>,
        digest: &RequestDigest,
    ) -> Result<String, Error> {
        debug_assert_eq!(verb.targets_item(), item.is_some());
        debug_assert_eq!(verb.has_body(), body.is_some());

        let url = match item {
            Some(item) => item_url(&self.root, list, item),
            None => items_url(&self.root, list),
        };
        let item_no = item.map(ItemId::get);

        let headers = header_map(mutation_headers(verb, digest))?;
        let mut request = self.http.post(&url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        debug!(%verb, %list, item = ?item_no, %url, "Sending list mutation");
        match send(request).await {
            Ok(response) => {
                info!(%verb, %list, item = ?item_no, "List mutation succeeded");
                Ok(response)
            }
            Err(e) => {
                warn!(%verb, %list, item = ?item_no, error = %e, "List mutation failed");
                Err(e)
            }
        }
    }
}

fn encode<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(payload)
        .map_err(|e| Error::InvalidInput(format!("payload serialization failed: {e}")))
}

/// Convert header pairs, rejecting values that cannot go on the wire.
pub(crate) fn header_map(pairs: Vec<(&'static str, String)>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::with_capacity(pairs.len());
    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::InvalidInput(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(&value)
            .map_err(|e| Error::InvalidInput(format!("invalid value for header {name}: {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Send a request and return the body of a 2xx response.
pub(crate) async fn send(request: reqwest::RequestBuilder) -> Result<String, Error> {
    let response = request
        .send()
        .await
        .map_err(|e| Error::Transport(format!("request failed: {e}")))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(format!("reading response failed: {e}")))?;
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
