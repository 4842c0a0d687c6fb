// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_state::ChatState;
pub use message_direction::MessageDirection;
pub use otr_event::OtrEvent;
pub use prefix_format::{PrefixContext, PrefixFormat, Segment, Segments};
pub use template_key::TemplateKey;
pub use ui_template::UITemplate;

mod chat_state;
mod message_direction;
mod otr_event;
mod prefix_format;
mod template_key;
mod ui_template;
