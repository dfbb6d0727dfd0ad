//! FHIR-aligned resource models for encounter report bundling.
//!
//! This crate provides the **domain resource models** that an encounter report
//! is assembled from, plus the output [`Bundle`] container:
//! - one module per resource type (encounter, patient, practitioner, ...)
//! - the [`Resolved`] wrapper for associations whose target object is already
//!   attached, not merely referenced by address
//! - the [`Resource`] trait giving every resource an addressable identity
//!
//! This crate focuses on:
//! - FHIR STU3 semantic alignment (without FHIR REST transport)
//! - serialisation/deserialisation of resources and the assembled bundle
//!
//! It is pure data: no I/O, no validation of clinical content. Resource ids
//! are opaque address strings assigned by the upstream mapping stage.

pub mod appointment;
pub mod bundle;
pub mod encounter;
pub mod episode_of_care;
pub mod location;
pub mod organization;
pub mod patient;
pub mod practitioner;
pub mod reference;
pub mod referral_request;

// Re-export resource facades
pub use appointment::{Appointment, AppointmentParticipant, AppointmentStatus};
pub use bundle::{Bundle, BundleEntry, BundleKind, EntryResource};
pub use encounter::{Encounter, EncounterLocation, EncounterParticipant, EncounterStatus, Period};
pub use episode_of_care::{EpisodeOfCare, EpisodeOfCareStatus};
pub use location::Location;
pub use organization::Organization;
pub use patient::{HumanName, Patient};
pub use practitioner::Practitioner;
pub use reference::Resolved;
pub use referral_request::ReferralRequest;

/// Common surface of every resource that can become a bundle entry.
///
/// The id is the resource's address string (for example `urn:uuid:...`),
/// assigned by the upstream mapping stage before bundle assembly begins; an
/// entry's `fullUrl` is derived directly and solely from it.
pub trait Resource {
    /// The resource's address string.
    fn id(&self) -> &str;

    /// The FHIR resource type name, as it appears on the wire.
    fn resource_type(&self) -> &'static str;
}
