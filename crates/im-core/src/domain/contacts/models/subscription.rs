// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// RFC 6121 roster subscription state.
#[derive(Debug, PartialEq, Eq, Display, EnumString, Clone, Copy, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    None,
    From,
    To,
    Both,
}

impl Subscription {
    /// Whether the contact shares their presence with us.
    pub fn receives_presence(self) -> bool {
        matches!(self, Subscription::To | Subscription::Both)
    }
}
