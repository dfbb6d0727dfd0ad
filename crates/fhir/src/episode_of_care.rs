//! Episodes of care that an encounter takes place within.

use serde::{Deserialize, Serialize};

use crate::organization::Organization;
use crate::practitioner::Practitioner;
use crate::reference::Resolved;
use crate::Resource;

/// Lifecycle state of an episode of care (FHIR STU3 wire codes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpisodeOfCareStatus {
    Planned,
    Waitlist,
    Active,
    Onhold,
    Finished,
    Cancelled,
}

/// A longer-running association between a patient and a care organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeOfCare {
    /// Address string assigned upstream.
    pub id: String,

    /// Lifecycle state.
    pub status: EpisodeOfCareStatus,

    /// Practitioner coordinating the episode, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_manager: Option<Resolved<Practitioner>>,

    /// Organization the episode belongs to, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Resolved<Organization>>,
}

impl Resource for EpisodeOfCare {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_type(&self) -> &'static str {
        "EpisodeOfCare"
    }
}
