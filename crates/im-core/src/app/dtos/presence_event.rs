// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

/// A presence stanza as delivered by the protocol layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PresenceEvent {
    /// The sender, a bare or full JID.
    pub from: String,
    /// The `type` attribute. Absent for available presence.
    pub type_: Option<String>,
    pub show: Option<String>,
    pub status: Option<String>,
}

impl PresenceEvent {
    pub fn available(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            ..Default::default()
        }
    }

    pub fn unavailable(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            type_: Some("unavailable".to_string()),
            ..Default::default()
        }
    }

    pub fn with_show(mut self, show: impl Into<String>) -> Self {
        self.show = Some(show.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
