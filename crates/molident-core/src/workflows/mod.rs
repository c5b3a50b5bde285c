//! # Workflows Module
//!
//! High-level entry points tying the engine stages together into complete
//! per-record operations for the archival host.
//!
//! - **Identification Workflow** ([`identify`]) - Walks one record's topology
//!   entries through selection, validation, geometry conditioning, identity
//!   resolution, and annotation.
//!
//! A workflow never raises to the host: a malformed or unmatched structure
//! costs at most its own entry, and the absence of an identity block is the
//! only host-visible failure signal. The diagnostics stream carries the
//! graded detail.

pub mod identify;
