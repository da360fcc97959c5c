//! # rw-core
//!
//! Core record types, enums, and error types for regwatch.
//!
//! This crate provides the foundational types shared across all regwatch crates:
//! - Registry records ([`entities::RegistryEntity`], [`entities::Snapshot`], [`entities::Diff`])
//! - Contact records produced by entity resolution
//! - Prospects and the persisted per-entity enrichment record
//! - Source and status enums
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
