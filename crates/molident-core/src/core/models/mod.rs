//! # Core Models Module
//!
//! This module contains the data structures exchanged between the archival host and the
//! identification pipeline.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atoms and ordered atom sets with lattice and periodicity
//! - [`record`] - The host record chain: results, material, topology entries, and the
//!   identity-annotation block written by the pipeline
//!
//! The host owns these structures; the pipeline reads them, derives working copies of the
//! geometry, and writes only the designated mutable output fields of a topology entry.

pub mod atom;
pub mod record;
