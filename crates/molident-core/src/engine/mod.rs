//! # Engine Module
//!
//! This module implements the stages of the molecule-identification pipeline.
//! Each stage is a pure function over the core data model; the only side
//! effect any of them has is a diagnostic event on the tracing stream.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - The explicit value object carrying atom-count
//!   bounds, the lookup mode, and the reference-database paths
//! - **Atom Selection** ([`selection`]) - Resolving a topology entry to the atom set
//!   it describes (inline, shared, or index-selected)
//! - **Validation** ([`validation`]) - Acceptance gates: atom-count bounds and
//!   dimensionality
//! - **Identity Resolution** ([`resolver`]) - Canonical-key computation, reference
//!   lookup, and match-tier classification
//! - **Annotation** ([`annotate`]) - Writing a resolved identity back onto a
//!   topology entry without disturbing caller-provided fields
//!
//! Failures of external collaborators are contained at the stage where the external
//! call occurs; no stage raises to its caller.

pub mod annotate;
pub mod config;
pub mod resolver;
pub mod selection;
pub mod validation;
