//! Pure request-construction logic for SharePoint-style list APIs.
//! No HTTP dependency — URLs, header sets and payload envelopes only.

mod error;
mod ids;
mod metadata;
mod url;
mod verb;

pub use error::ODataError;
pub use ids::{ApiRoot, ItemId, ListId, RequestDigest};
pub use metadata::{entity_type_name, unwrap_collection, unwrap_verbose, with_metadata};
pub use url::{ListQuery, TOP_LIMIT, build_list_url, item_url, items_url};
pub use verb::{ACCEPT_NOMETADATA, ODATA_VERBOSE, Verb, mutation_headers, read_headers};
