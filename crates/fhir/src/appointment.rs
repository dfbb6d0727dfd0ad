//! Appointments associated with an encounter.
//!
//! The appointment itself is resolved by an external scheduling lookup before
//! bundle assembly; here it is plain data with zero or more participant
//! slots, each optionally bound to an actor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::practitioner::Practitioner;
use crate::reference::Resolved;
use crate::Resource;

/// Lifecycle state of an appointment (FHIR STU3 wire codes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Proposed,
    Pending,
    Booked,
    Arrived,
    Fulfilled,
    Cancelled,
    Noshow,
}

/// One participant slot on an appointment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentParticipant {
    /// The actor bound to this slot, when the slot is bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Resolved<Practitioner>>,
}

/// A booking linked to the encounter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Address string assigned upstream.
    pub id: String,

    /// Lifecycle state.
    pub status: AppointmentStatus,

    /// Scheduled start instant, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    /// Participant slots in list order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub participant: Vec<AppointmentParticipant>,
}

impl Resource for Appointment {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_type(&self) -> &'static str {
        "Appointment"
    }
}
