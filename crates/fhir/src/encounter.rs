//! The encounter: root of the report graph.
//!
//! An encounter carries typed, possibly-absent links to the entities involved
//! in it. Every link is a *resolved* association (see [`Resolved`]): the
//! upstream mapping stage attaches the live target object before the
//! encounter reaches bundle assembly, so consumers never dereference a bare
//! address string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;
use crate::episode_of_care::EpisodeOfCare;
use crate::location::Location;
use crate::organization::Organization;
use crate::patient::Patient;
use crate::practitioner::Practitioner;
use crate::reference::Resolved;
use crate::referral_request::ReferralRequest;
use crate::Resource;

/// Lifecycle state of an encounter (FHIR STU3 wire codes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncounterStatus {
    Planned,
    Arrived,
    Triaged,
    InProgress,
    Onleave,
    Finished,
    Cancelled,
}

/// A start/end time window.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

/// One entry in the encounter's participant list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterParticipant {
    /// The individual acting in this slot, when resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual: Option<Resolved<Practitioner>>,
}

/// One entry in the encounter's location list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterLocation {
    /// The location, when the link is resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Resolved<Location>>,
}

/// The clinical encounter a report bundle is assembled from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    /// Address string assigned upstream.
    pub id: String,

    /// Lifecycle state.
    pub status: EncounterStatus,

    /// When the encounter took place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,

    /// The patient the encounter is about. Required on a well-formed
    /// encounter; modelled as optional because upstream resolution can fail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Resolved<Patient>>,

    /// Organization responsible for delivering the encounter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<Resolved<Organization>>,

    /// Participants in list order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant: Vec<EncounterParticipant>,

    /// Booking the encounter originated from, when one was found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<Resolved<Appointment>>,

    /// Location links in list order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<EncounterLocation>,

    /// The referral that initiated the encounter. Required on a well-formed
    /// encounter; modelled as optional because upstream resolution can fail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incoming_referral: Option<Resolved<ReferralRequest>>,

    /// Episode of care the encounter takes place within.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_of_care: Option<Resolved<EpisodeOfCare>>,
}

impl Resource for Encounter {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_type(&self) -> &'static str {
        "Encounter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_relations_are_omitted_from_the_wire_form() {
        let encounter = Encounter {
            id: "urn:uuid:0c4e1d8a-7b2f-4a5e-8c3d-9e0f1a2b3c4d".to_string(),
            status: EncounterStatus::Finished,
            period: None,
            subject: None,
            service_provider: None,
            participant: Vec::new(),
            appointment: None,
            location: Vec::new(),
            incoming_referral: None,
            episode_of_care: None,
        };

        let json = serde_json::to_value(&encounter).expect("serialise encounter");
        let object = json.as_object().expect("encounter is a JSON object");
        assert_eq!(object.len(), 2, "only id and status should be present");
        assert_eq!(json["status"], "finished");
    }

    #[test]
    fn resolved_relations_round_trip_with_reference_and_target() {
        let input = r#"{
            "id": "urn:uuid:0c4e1d8a-7b2f-4a5e-8c3d-9e0f1a2b3c4d",
            "status": "in-progress",
            "subject": {
                "reference": "urn:uuid:5d9a44b6-8a67-4b86-9f0a-1d2c3e4f5a6b",
                "resource": {
                    "id": "urn:uuid:5d9a44b6-8a67-4b86-9f0a-1d2c3e4f5a6b",
                    "name": { "family": "Smith", "given": ["Jo"] }
                }
            }
        }"#;

        let encounter: Encounter = serde_json::from_str(input).expect("parse encounter");
        assert_eq!(encounter.status, EncounterStatus::InProgress);
        let subject = encounter.subject.as_ref().expect("subject resolved");
        assert_eq!(subject.reference, subject.resource.id);

        let reparsed: Encounter = serde_json::from_str(
            &serde_json::to_string(&encounter).expect("serialise encounter"),
        )
        .expect("reparse encounter");
        assert_eq!(encounter, reparsed);
    }
}
