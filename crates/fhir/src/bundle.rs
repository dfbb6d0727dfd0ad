//! The transactional bundle produced by one assembly call.
//!
//! A [`Bundle`] is an ordered sequence of entries, each pairing an address
//! (`fullUrl`) with a resource payload, plus a fixed document-kind marker.
//! The bundle *borrows* the input graph: assembly is a pure read-and-flatten
//! projection that copies and mutates nothing.

use serde::Serialize;

use crate::appointment::Appointment;
use crate::encounter::Encounter;
use crate::episode_of_care::EpisodeOfCare;
use crate::location::Location;
use crate::organization::Organization;
use crate::patient::Patient;
use crate::practitioner::Practitioner;
use crate::referral_request::ReferralRequest;
use crate::Resource;

/// Document-kind marker carried by the bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleKind {
    /// Transactional submission: the downstream store processes the entries
    /// as one all-or-nothing unit.
    Transaction,
}

/// One (address, resource) pair placed into the bundle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry<'a> {
    /// Address of the entry, derived solely from the resource's own id.
    pub full_url: &'a str,

    /// The resource payload, borrowed from the input graph.
    pub resource: EntryResource<'a>,
}

/// The assembled output document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bundle<'a> {
    /// Document-kind marker, fixed to [`BundleKind::Transaction`].
    #[serde(rename = "type")]
    pub kind: BundleKind,

    /// Ordered entries; the order is a contract, not an accident.
    #[serde(rename = "entry")]
    pub entries: Vec<BundleEntry<'a>>,
}

/// Borrowed payload of a bundle entry.
///
/// The closed set of resource types that can appear in an encounter report.
/// On the wire each payload carries its type in a `resourceType` tag, as FHIR
/// JSON does.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "resourceType")]
pub enum EntryResource<'a> {
    Encounter(&'a Encounter),
    Organization(&'a Organization),
    Practitioner(&'a Practitioner),
    Appointment(&'a Appointment),
    Location(&'a Location),
    ReferralRequest(&'a ReferralRequest),
    Patient(&'a Patient),
    EpisodeOfCare(&'a EpisodeOfCare),
}

impl<'a> EntryResource<'a> {
    /// Address string of the wrapped resource.
    pub fn id(&self) -> &'a str {
        match *self {
            EntryResource::Encounter(r) => r.id(),
            EntryResource::Organization(r) => r.id(),
            EntryResource::Practitioner(r) => r.id(),
            EntryResource::Appointment(r) => r.id(),
            EntryResource::Location(r) => r.id(),
            EntryResource::ReferralRequest(r) => r.id(),
            EntryResource::Patient(r) => r.id(),
            EntryResource::EpisodeOfCare(r) => r.id(),
        }
    }

    /// Wire name of the wrapped resource's type.
    pub fn resource_type(&self) -> &'static str {
        match *self {
            EntryResource::Encounter(r) => r.resource_type(),
            EntryResource::Organization(r) => r.resource_type(),
            EntryResource::Practitioner(r) => r.resource_type(),
            EntryResource::Appointment(r) => r.resource_type(),
            EntryResource::Location(r) => r.resource_type(),
            EntryResource::ReferralRequest(r) => r.resource_type(),
            EntryResource::Patient(r) => r.resource_type(),
            EntryResource::EpisodeOfCare(r) => r.resource_type(),
        }
    }
}

macro_rules! entry_resource_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for EntryResource<'a> {
                fn from(resource: &'a $ty) -> Self {
                    EntryResource::$variant(resource)
                }
            }
        )*
    };
}

entry_resource_from! {
    Encounter => Encounter,
    Organization => Organization,
    Practitioner => Practitioner,
    Appointment => Appointment,
    Location => Location,
    ReferralRequest => ReferralRequest,
    Patient => Patient,
    EpisodeOfCare => EpisodeOfCare,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_resource_reports_wire_type_and_id() {
        let patient = Patient {
            id: "urn:uuid:5d9a44b6-8a67-4b86-9f0a-1d2c3e4f5a6b".to_string(),
            name: None,
            birth_date: None,
        };

        let entry: EntryResource<'_> = (&patient).into();
        assert_eq!(entry.resource_type(), "Patient");
        assert_eq!(entry.id(), "urn:uuid:5d9a44b6-8a67-4b86-9f0a-1d2c3e4f5a6b");
    }

    #[test]
    fn bundle_serialises_with_transaction_marker_and_tagged_payloads() {
        let patient = Patient {
            id: "urn:uuid:5d9a44b6-8a67-4b86-9f0a-1d2c3e4f5a6b".to_string(),
            name: None,
            birth_date: None,
        };
        let bundle = Bundle {
            kind: BundleKind::Transaction,
            entries: vec![BundleEntry {
                full_url: &patient.id,
                resource: (&patient).into(),
            }],
        };

        let json = serde_json::to_value(&bundle).expect("serialise bundle");
        assert_eq!(json["type"], "transaction");
        assert_eq!(
            json["entry"][0]["fullUrl"],
            "urn:uuid:5d9a44b6-8a67-4b86-9f0a-1d2c3e4f5a6b"
        );
        assert_eq!(json["entry"][0]["resource"]["resourceType"], "Patient");
    }
}
