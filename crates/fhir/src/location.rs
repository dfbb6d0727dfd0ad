//! Locations where the encounter took place.

use serde::{Deserialize, Serialize};

use crate::organization::Organization;
use crate::reference::Resolved;
use crate::Resource;

/// A physical place, optionally managed by an organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Address string assigned upstream.
    pub id: String,

    /// Display name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Organization responsible for this location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managing_organization: Option<Resolved<Organization>>,
}

impl Resource for Location {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_type(&self) -> &'static str {
        "Location"
    }
}
