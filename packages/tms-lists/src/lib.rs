//! # TMS Lists
//!
//! Client for the SharePoint lists behind the Training Management System.
//! Reads go out as GET with `odata=nometadata`; creates, updates and deletes
//! go out as POST with the verb carried in `X-HTTP-METHOD`.
//!
//! ## Quick Start
//! ```bash
//! TMS_API_URL=https://host/sites/tms/_api/ \
//! TMS_LISTS__COURSES=<guid> \
//! cargo run --bin tms-lists -- read courses Title,Id
//! ```

pub mod catalog;
pub mod client;
pub mod config;
mod error;
pub mod query;

pub use catalog::{ListCatalog, ListName};
pub use client::ListClient;
pub use config::Config;
pub use error::Error;
pub use query::ReadQuery;

pub use tms_odata::{ApiRoot, ItemId, ListId, ListQuery, RequestDigest};
