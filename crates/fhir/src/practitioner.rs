//! Practitioner actors: encounter participants, appointment actors and
//! episode-of-care care managers.

use serde::{Deserialize, Serialize};

use crate::patient::HumanName;
use crate::Resource;

/// An individual involved in delivering the encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    /// Address string assigned upstream.
    pub id: String,

    /// Primary name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,
}

impl Resource for Practitioner {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_type(&self) -> &'static str {
        "Practitioner"
    }
}
