//! # rw-resolve
//!
//! Entity resolution for regwatch: from a registry name and a pile of search
//! results to a ranked, employer-checked, confidence-scored contact list.
//!
//! Leaves first:
//! - [`names`]: legal-suffix stripping, significant keywords, search queries
//! - [`matcher`]: does a search result actually talk about the target company?
//! - [`employer`]: pull a claimed employer out of a snippet and check it
//! - [`candidate`]: turn a search result into a [`CandidateContact`](rw_core::entities::CandidateContact)
//! - [`ranking`]: seniority priorities and stable ordering
//! - [`dedup`]: flag the same person claimed by several entities
//! - [`scoring`]: additive confidence score
//!
//! Everything here is pure and synchronous; I/O lives in `rw-search` and
//! `rw-enrich`.

pub mod candidate;
pub mod dedup;
pub mod employer;
pub mod matcher;
pub mod names;
pub mod ranking;
pub mod scoring;

mod text;

pub use candidate::candidate_from_result;
pub use dedup::{contact_key, dedup_across};
pub use employer::{EmployerExtractor, extract_employer, verify};
pub use matcher::{mentions_entity, person_name_from_title};
pub use names::{SearchQuery, normalize, search_queries, significant_keywords};
pub use ranking::{priority_for, rank};
pub use scoring::Scorer;
