//! # rw-enrich
//!
//! Contact enrichment for newly registered entities.
//!
//! [`Enricher::run`] walks a list of entities through search, matching,
//! employer verification, ranking, and scoring, appending one
//! [`EnrichmentRecord`](rw_core::entities::EnrichmentRecord) per entity to a
//! JSONL [`StateStore`] as it goes. A crash loses at most the entity in
//! flight; the next run skips everything already complete.

mod error;
mod pipeline;
mod state;

pub use error::StateError;
pub use pipeline::{Enricher, RunOptions};
pub use state::{EnrichmentState, StateStore};
