//! OData header sets and HTTP verb emulation.
//!
//! The list API only accepts GET and POST from browser-origin clients.
//! Updates and deletes are POSTs carrying `X-HTTP-METHOD`, plus `IF-MATCH: *`
//! so the server skips its etag check (last writer wins).

use crate::RequestDigest;

pub const ACCEPT_NOMETADATA: &str = "application/json; odata=nometadata";
pub const ODATA_VERBOSE: &str = "application/json; odata=verbose";

/// Mutation kind, carried over POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Create,
    Merge,
    Delete,
}

impl Verb {
    /// Value of `X-HTTP-METHOD`, absent for a plain create.
    pub fn method_override(self) -> Option<&'static str> {
        match self {
            Verb::Create => None,
            Verb::Merge => Some("MERGE"),
            Verb::Delete => Some("DELETE"),
        }
    }

    /// Whether the request addresses a single item.
    pub fn targets_item(self) -> bool {
        !matches!(self, Verb::Create)
    }

    pub fn has_body(self) -> bool {
        !matches!(self, Verb::Delete)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Create => "create",
            Verb::Merge => "update",
            Verb::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Headers for a read.
pub fn read_headers() -> Vec<(&'static str, String)> {
    vec![("Accept", ACCEPT_NOMETADATA.to_string())]
}

/// Headers for a mutation, in wire order.
pub fn mutation_headers(verb: Verb, digest: &RequestDigest) -> Vec<(&'static str, String)> {
    let mut headers = vec![
        ("Accept", ODATA_VERBOSE.to_string()),
        ("Content-Type", ODATA_VERBOSE.to_string()),
        ("X-RequestDigest", digest.expose().to_string()),
    ];
    if let Some(method) = verb.method_override() {
        headers.push(("IF-MATCH", "*".to_string()));
        headers.push(("X-HTTP-METHOD", method.to_string()));
    }
    headers
}
