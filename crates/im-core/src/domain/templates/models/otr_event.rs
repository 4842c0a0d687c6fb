// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::TemplateKey;

/// Changes of an OTR session that are announced in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtrEvent {
    GoneSecure,
    GoneInsecure,
    Disabled,
}

impl OtrEvent {
    pub fn template_key(self) -> TemplateKey {
        match self {
            OtrEvent::GoneSecure => TemplateKey::OtrGoneSecure,
            OtrEvent::GoneInsecure => TemplateKey::OtrGoneInsecure,
            OtrEvent::Disabled => TemplateKey::OtrDisabled,
        }
    }
}
