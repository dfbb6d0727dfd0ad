//! Resolved associations between resources.
//!
//! Every relation in the encounter graph carries both a structural reference
//! (an address string) and the resolved target object attached by the
//! upstream mapping stage. Bundle assembly only ever acts on the resolved
//! target; the reference string is kept for the wire form of the owning
//! resource.

use serde::{Deserialize, Serialize};

/// An association whose target resource is already attached.
///
/// Optional relations are modelled as `Option<Resolved<T>>` so that the
/// presence check and the target fetch collapse into a single match: there is
/// no separate "has" flag that can disagree with the attached object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved<T> {
    /// Structural reference string, for example `urn:uuid:...`.
    pub reference: String,

    /// The resolved target resource.
    pub resource: T,
}

impl<T> Resolved<T> {
    /// Wraps a resolved target together with its reference string.
    pub fn new(reference: impl Into<String>, resource: T) -> Self {
        Self {
            reference: reference.into(),
            resource,
        }
    }
}
