// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::TemplateKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

impl MessageDirection {
    pub fn prefix_format_key(self) -> TemplateKey {
        match self {
            MessageDirection::Incoming => TemplateKey::MsgInFormat,
            MessageDirection::Outgoing => TemplateKey::MsgOutFormat,
        }
    }

    pub fn html_format_key(self) -> TemplateKey {
        match self {
            MessageDirection::Incoming => TemplateKey::HtmlMsgInFormat,
            MessageDirection::Outgoing => TemplateKey::HtmlMsgOutFormat,
        }
    }
}
