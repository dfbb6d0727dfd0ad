//! Encounter report bundle assembly.
//!
//! One assembly call walks the resolved encounter graph in a fixed order and
//! emits exactly one bundle entry per reachable, present entity. The order is
//! a design contract: clinically central entities (encounter, provider,
//! participants) come before peripheral ones (referral, episode of care), and
//! a parent is always emitted before the entities that structurally depend on
//! it. The contract lives in one place, [`ASSEMBLY_ORDER`], consumed by one
//! walker.
//!
//! Entries are never deduplicated: an entity reachable via more than one path
//! appears once per path, matching what downstream consumers observe today.

use fhir::{Bundle, BundleEntry, BundleKind, Encounter, EntryResource, Organization, Resolved};
use tracing::debug;

use crate::{ReportError, ReportResult};

/// Ceiling on organization part-of chain traversal.
///
/// The input model does not guarantee the chain is acyclic, so traversal
/// treats call depth as a bounded resource and fails closed past this many
/// levels instead of walking an arbitrarily long (or circular) chain.
pub const MAX_ORGANIZATION_DEPTH: usize = 64;

/// One position in the fixed traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Encounter,
    ServiceProvider,
    Participants,
    Appointment,
    Locations,
    IncomingReferral,
    Subject,
    EpisodeOfCare,
}

/// The traversal order contract. Two assemblies of equivalent input graphs
/// produce entries in the same relative order because both walk this list.
const ASSEMBLY_ORDER: [Section; 8] = [
    Section::Encounter,
    Section::ServiceProvider,
    Section::Participants,
    Section::Appointment,
    Section::Locations,
    Section::IncomingReferral,
    Section::Subject,
    Section::EpisodeOfCare,
];

/// Assembles one transactional report bundle from one resolved encounter.
///
/// The returned bundle borrows the encounter graph: nothing is copied or
/// mutated, and the caller owns the bundle value outright.
///
/// # Arguments
///
/// * `encounter` - The root encounter, with every optional relation already
///   resolved to its target object wherever present.
///
/// # Returns
///
/// Returns a [`Bundle`] with the transaction document-kind marker and one
/// entry per reachable, present entity in contract order.
///
/// # Errors
///
/// Returns a [`ReportError`] if:
/// - the incoming referral or the subject patient is not resolved,
/// - any reachable resource has an empty id,
/// - an organization part-of chain exceeds [`MAX_ORGANIZATION_DEPTH`] levels.
///
/// On error no partial bundle is returned; assembly is all-or-nothing.
pub fn assemble_encounter_bundle(encounter: &Encounter) -> ReportResult<Bundle<'_>> {
    let mut assembler = BundleAssembler::new();
    for section in ASSEMBLY_ORDER {
        assembler.append_section(section, encounter)?;
    }
    Ok(assembler.finish())
}

/// Accumulates entries for one assembly call.
struct BundleAssembler<'a> {
    entries: Vec<BundleEntry<'a>>,
}

impl<'a> BundleAssembler<'a> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn finish(self) -> Bundle<'a> {
        Bundle {
            kind: BundleKind::Transaction,
            entries: self.entries,
        }
    }

    /// Emits the entries contributed by one traversal position.
    ///
    /// Absence of an optional relation silently skips exactly that branch;
    /// sibling edges and later positions are unaffected.
    fn append_section(&mut self, section: Section, encounter: &'a Encounter) -> ReportResult<()> {
        match section {
            Section::Encounter => self.append(encounter.into()),
            Section::ServiceProvider => {
                if let Some(provider) = &encounter.service_provider {
                    self.append((&provider.resource).into())?;
                }
                Ok(())
            }
            Section::Participants => {
                for participant in &encounter.participant {
                    if let Some(individual) = &participant.individual {
                        self.append((&individual.resource).into())?;
                    }
                }
                Ok(())
            }
            Section::Appointment => {
                if let Some(link) = &encounter.appointment {
                    let appointment = &link.resource;
                    self.append(appointment.into())?;
                    for slot in &appointment.participant {
                        if let Some(actor) = &slot.actor {
                            self.append((&actor.resource).into())?;
                        }
                    }
                }
                Ok(())
            }
            Section::Locations => {
                for component in &encounter.location {
                    if let Some(link) = &component.location {
                        let location = &link.resource;
                        self.append(location.into())?;
                        if let Some(organization) = &location.managing_organization {
                            self.append_organization_chain(organization)?;
                        }
                    }
                }
                Ok(())
            }
            Section::IncomingReferral => match &encounter.incoming_referral {
                Some(referral) => self.append((&referral.resource).into()),
                None => Err(ReportError::MissingRequiredRelation("incomingReferral")),
            },
            Section::Subject => match &encounter.subject {
                Some(subject) => self.append((&subject.resource).into()),
                None => Err(ReportError::MissingRequiredRelation("subject")),
            },
            Section::EpisodeOfCare => {
                if let Some(link) = &encounter.episode_of_care {
                    let episode = &link.resource;
                    self.append(episode.into())?;
                    if let Some(manager) = &episode.care_manager {
                        self.append((&manager.resource).into())?;
                    }
                    if let Some(organization) = &episode.managing_organization {
                        // Single entry: only location managers carry their
                        // part-of ancestry into the bundle.
                        self.append((&organization.resource).into())?;
                    }
                }
                Ok(())
            }
        }
    }

    /// Walks an organization's part-of chain, nearest ancestor first.
    ///
    /// Iterative with an explicit depth counter; the chain is not guaranteed
    /// acyclic, so traversal fails closed past [`MAX_ORGANIZATION_DEPTH`].
    fn append_organization_chain(
        &mut self,
        first: &'a Resolved<Organization>,
    ) -> ReportResult<()> {
        let mut current = &first.resource;
        let mut depth = 0usize;
        loop {
            depth += 1;
            if depth > MAX_ORGANIZATION_DEPTH {
                return Err(ReportError::UnboundedChainDepth(MAX_ORGANIZATION_DEPTH));
            }
            self.append(current.into())?;
            match &current.part_of {
                Some(parent) => current = &parent.resource,
                None => break,
            }
        }
        Ok(())
    }

    /// The sole path by which an entity becomes a bundle entry.
    ///
    /// Callers only pass resources known to be present; this checks the
    /// address, not the presence.
    fn append(&mut self, resource: EntryResource<'a>) -> ReportResult<()> {
        let full_url = resource.id();
        if full_url.is_empty() {
            return Err(ReportError::MalformedIdentity(resource.resource_type()));
        }
        debug!(
            full_url,
            resource_type = resource.resource_type(),
            "appending bundle entry"
        );
        self.entries.push(BundleEntry { full_url, resource });
        Ok(())
    }
}
