//! Patient demographics, the subject of an encounter.

use serde::{Deserialize, Serialize};

use crate::Resource;

/// A human name, shared by patient and practitioner resources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanName {
    /// Family name (surname).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Given names (first name, middle names).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,
}

/// The person the encounter is about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Address string assigned upstream.
    pub id: String,

    /// Primary name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<HumanName>,

    /// Date of birth (ISO 8601 date: YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
}

impl Resource for Patient {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_type(&self) -> &'static str {
        "Patient"
    }
}
