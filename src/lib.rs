//! Rcatalog - Load a track catalog and publish derived views to a key-value store
//!
//! This library reads a line-delimited JSON catalog of tracks, holds the
//! records in memory, and exports per-track records, artist indexes and
//! per-user recommendation lists into an external key-value store for a
//! serving layer to look up.

/// Catalog loading and store export pipeline
pub mod catalog;
