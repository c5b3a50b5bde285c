//! # molident Core Library
//!
//! A library for identifying isolated molecules inside parsed atomistic archive records
//! and enriching their topology entries with canonical chemical identifiers.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of concerns,
//! making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`AtomSet`, the host record
//!   chain), the canonical-key type, pure geometry routines (minimum-image unwrapping), and the
//!   trait seams through which the external collaborators (chemistry toolkit, dimensionality
//!   classifier, reference-database backend) are reached.
//!
//! - **[`engine`]: The Logic Core.** Implements the pipeline stages: atom selection from a
//!   topology entry, acceptance validation, identity resolution against the reference database,
//!   and annotation of the entry with the resolved identity.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer. It ties the
//!   `engine` and `core` together into the complete per-record identification pass the archival
//!   host invokes. It never fails the host's run: every failure is contained and reported through
//!   the diagnostics stream.

pub mod core;
pub mod engine;
pub mod workflows;
