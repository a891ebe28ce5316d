//! Identifier newtypes shared by reads and mutations.

use std::fmt;
use std::num::NonZeroU64;

use crate::ODataError;

/// Base URL of the REST API, e.g. `https://host/sites/tms/_api/`.
///
/// Kept verbatim apart from a trailing `/`, which is appended when missing
/// so that `web/Lists(...)` joins onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoot(String);

impl ApiRoot {
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        if !root.ends_with('/') {
            root.push('/');
        }
        Self(root)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// GUID of a remote list. Opaque; composed into URLs as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListId(String);

impl ListId {
    pub fn new(guid: impl Into<String>) -> Self {
        Self(guid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListId {
    fn from(guid: &str) -> Self {
        Self::new(guid)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Positive item id within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(NonZeroU64);

impl ItemId {
    /// `None` for zero.
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for ItemId {
    type Error = ODataError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(ODataError::InvalidItemId(id))
    }
}

impl std::str::FromStr for ItemId {
    type Err = ODataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u64 = s
            .trim()
            .parse()
            .map_err(|_| ODataError::UnparsableItemId(s.to_string()))?;
        Self::try_from(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short-lived `X-RequestDigest` anti-forgery token.
/// Obtained and renewed by the caller; `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestDigest(String);

impl RequestDigest {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RequestDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RequestDigest(***)")
    }
}
