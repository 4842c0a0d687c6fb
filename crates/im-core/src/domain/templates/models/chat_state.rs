// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

use super::TemplateKey;

/// XEP-0085 chat state notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ChatState {
    #[default]
    Active,
    Composing,
    Paused,
    Inactive,
    Gone,
}

impl ChatState {
    /// `Active` is the resting state and is not announced.
    pub fn template_key(self) -> Option<TemplateKey> {
        match self {
            ChatState::Active => None,
            ChatState::Composing => Some(TemplateKey::ChatStateComposing),
            ChatState::Paused => Some(TemplateKey::ChatStatePaused),
            ChatState::Inactive => Some(TemplateKey::ChatStateInactive),
            ChatState::Gone => Some(TemplateKey::ChatStateGone),
        }
    }
}
