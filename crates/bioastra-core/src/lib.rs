//! bioastra-core: the query engine behind the BIOAstra API.
//!
//! Everything here is synchronous and pure over a read-only record
//! collection. The HTTP layer lives in `bioastra-api`.
//!
//! # Architecture
//!
//! ```text
//! RecordSource ──► Filter ──► query (sort + paginate) ──► ResultPage
//!                    │
//!                    └──► aggregate / facets / suggest
//! ```
//!
//! `insights`, `resources`, `dashboard` and `home` are static tables that
//! do not read the store.

pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod facets;
pub mod filter;
pub mod home;
pub mod insights;
pub mod query;
pub mod resources;
pub mod store;
pub mod suggest;
pub mod types;

pub use config::Config;
pub use error::{CoreError, Result};
pub use filter::{Filter, Predicate};
pub use query::{Pagination, ResultPage};
pub use store::{RecordSource, StaticStore};
pub use types::PublicationRecord;
