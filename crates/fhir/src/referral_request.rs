//! The referral request that initiated the encounter.
//!
//! Unlike the other relations, the incoming referral is treated as always
//! present and resolved on a well-formed encounter; its absence is an
//! upstream contract violation surfaced during assembly, never skipped.

use serde::{Deserialize, Serialize};

use crate::Resource;

/// The incoming referral behind the encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRequest {
    /// Address string assigned upstream.
    pub id: String,

    /// Free-text description of the referral, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for ReferralRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn resource_type(&self) -> &'static str {
        "ReferralRequest"
    }
}
