//! List endpoint URL composition.
//!
//! Field expressions are inserted verbatim: no escaping, no syntax checks.
//! Percent-encoding, where needed, is left to the HTTP transport.

use crate::{ApiRoot, ItemId, ListId};

/// Row cap appended to every read.
pub const TOP_LIMIT: u32 = 5000;

/// Format: `{root}web/Lists(guid'{list}')/items`.
pub fn items_url(root: &ApiRoot, list: &ListId) -> String {
    format!("{root}web/Lists(guid'{list}')/items")
}

/// Format: `{root}web/Lists(guid'{list}')/items({item})`.
pub fn item_url(root: &ApiRoot, list: &ListId, item: ItemId) -> String {
    format!("{}({item})", items_url(root, list))
}

/// Read URL with `$select`, optional `$expand` / `$filter`, and `$top`.
/// Empty `expand` / `filter` strings are treated as absent.
pub fn build_list_url(
    root: &ApiRoot,
    list: &ListId,
    select: &str,
    expand: Option<&str>,
    filter: Option<&str>,
) -> String {
    let mut url = items_url(root, list);
    url.push_str("?$select=");
    url.push_str(select);
    if let Some(expand) = expand.filter(|s| !s.is_empty()) {
        url.push_str("&$expand=");
        url.push_str(expand);
    }
    if let Some(filter) = filter.filter(|s| !s.is_empty()) {
        url.push_str("&$filter=");
        url.push_str(filter);
    }
    url.push_str(&format!("&$top={TOP_LIMIT}"));
    url
}

/// Read parameters for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub select: String,
    pub expand: Option<String>,
    pub filter: Option<String>,
}

impl ListQuery {
    pub fn new(select: impl Into<String>) -> Self {
        Self {
            select: select.into(),
            expand: None,
            filter: None,
        }
    }

    pub fn expand(mut self, expand: impl Into<String>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn to_url(&self, root: &ApiRoot, list: &ListId) -> String {
        build_list_url(
            root,
            list,
            &self.select,
            self.expand.as_deref(),
            self.filter.as_deref(),
        )
    }
}
