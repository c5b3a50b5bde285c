//! # Core Module
//!
//! This module provides the fundamental building blocks for molecule identification:
//! the data structures exchanged with the archival host, the canonical-key type, the
//! geometry routines that condition periodic structures, and the trait seams behind
//! which the external collaborators live.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atom sets and the host record chain
//!   (results, material, topology entries, identity blocks)
//! - **Chemical Identity** ([`chem`]) - The canonical-key type and the chemistry-provider seam
//! - **Geometry** ([`geometry`]) - Minimum-image unwrapping and the dimensionality seam
//! - **Reference Database** ([`db`]) - The lookup seam and the SQLite backend
//! - **Utilities** ([`utils`]) - Static chemical element tables

pub mod chem;
pub mod db;
pub mod geometry;
pub mod models;
pub mod utils;
