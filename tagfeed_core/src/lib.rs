#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Routing core: hashtag classification, TTL policy, and the
//! categorize-and-store / retrieval orchestration over a `PostStore`.

pub mod category;
pub mod retrieval;
pub mod router;
pub mod store;
pub mod ttl;

pub use category::{Category, Classification, TtlKind, classify};
pub use retrieval::{DayEntries, Retrieval};
pub use router::{RouteOutcome, Router, StoreKey};
pub use store::PostStore;
