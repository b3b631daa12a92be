//! bioastra: faceted search and aggregation over space-biology publications.
//!
//! The binary wires the two workspace crates together; this library
//! re-exports them so integration tests and benches can import everything
//! from one place.
//!
//! # Architecture
//!
//! ```text
//! HTTP ──► bioastra-api (axum) ──► bioastra-core
//!                                   ├── filter ──► query ──► ResultPage
//!                                   ├── aggregate / facets / suggest
//!                                   └── insights / resources / dashboard
//! ```
//!
//! The record store is built once at startup and shared read-only behind an
//! `Arc`; request handling takes no locks.

pub use bioastra_api as api;
pub use bioastra_core as engine;
