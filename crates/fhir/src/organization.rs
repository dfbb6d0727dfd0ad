//! Organizations: service providers, location managers and their part-of
//! ancestry.

use serde::{Deserialize, Serialize};

use crate::reference::Resolved;
use crate::Resource;

/// An organization, optionally part of a parent organization.
///
/// The `part_of` links form a chain of unbounded length terminated by an
/// organization with no parent. The model does not guarantee acyclicity;
/// consumers walking the chain must bound their traversal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Address string assigned upstream.
    pub id: String,

    /// Display name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Parent organization, when this one is part of a larger one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of: Option<Box<Resolved<Organization>>>,
}

impl Resource for Organization {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_type(&self) -> &'static str {
        "Organization"
    }
}
