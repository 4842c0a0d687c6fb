// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

/// A roster entry as received from the server.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterItem {
    pub jid: BareJid,
    pub name: Option<String>,
    /// The raw `subscription` attribute, e.g. `"both"` or `"remove"`.
    pub subscription: Option<String>,
    pub group: Option<String>,
}

impl RosterItem {
    pub fn new(jid: BareJid) -> Self {
        Self {
            jid,
            name: None,
            subscription: None,
            group: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_subscription(mut self, subscription: impl Into<String>) -> Self {
        self.subscription = Some(subscription.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}
