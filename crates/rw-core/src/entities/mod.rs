//! Record structs for regwatch.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be persisted as JSON and validated against a generated schema.

mod contact;
mod diff;
mod prospect;
mod registry_entity;
mod search_hit;
mod snapshot;

pub use contact::{CandidateContact, UNRANKED_PRIORITY, VerifiedContact};
pub use diff::Diff;
pub use prospect::{EnrichmentRecord, Prospect};
pub use registry_entity::{EntityKey, KeyMode, RegistryEntity};
pub use search_hit::SearchHit;
pub use snapshot::Snapshot;
