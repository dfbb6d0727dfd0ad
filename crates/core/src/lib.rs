//! # Report Core
//!
//! Core bundle-assembly logic for encounter report submission.
//!
//! This crate turns one fully resolved [`fhir::Encounter`] graph into one
//! transactional [`fhir::Bundle`]: a pure, synchronous read-and-flatten
//! projection with a deterministic entry order.
//!
//! **No transport concerns**: serialising the bundle onto a wire and
//! submitting it downstream belong to the caller, as does the upstream
//! mapping that produces the resolved encounter graph.

pub mod assembler;

pub use assembler::{assemble_encounter_bundle, MAX_ORGANIZATION_DEPTH};

/// Errors that abort a bundle assembly.
///
/// All variants are fatal to the current call: assembly is all-or-nothing and
/// no partial bundle is ever returned. Absence of an *optional* relation is
/// never an error; these cover upstream contract violations and
/// structural-integrity failures only.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// A relation that is always present on a well-formed encounter (the
    /// incoming referral, the subject patient) was not resolved upstream.
    #[error("required relation `{0}` is not resolved on the encounter")]
    MissingRequiredRelation(&'static str),

    /// A reachable resource has an empty id and cannot be addressed.
    #[error("{0} resource has an empty id and cannot be addressed in the bundle")]
    MalformedIdentity(&'static str),

    /// The organization part-of chain exceeded the traversal ceiling.
    #[error("organization part-of chain exceeds {0} levels")]
    UnboundedChainDepth(usize),
}

/// Type alias for Results that can fail with a [`ReportError`].
pub type ReportResult<T> = std::result::Result<T, ReportError>;
