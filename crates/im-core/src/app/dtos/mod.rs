// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::{
    contacts::models::{Contact, ContactError, ContactKind, Subscription},
    presence::models::{Presence, PresenceShow, PresenceStatus},
    shared::models::{ResourceId, SystemTimeProvider, TimeProvider},
    templates::models::{
        ChatState, MessageDirection, OtrEvent, PrefixContext, PrefixFormat, Segment,
        TemplateKey, UITemplate,
    },
};

pub use presence_event::PresenceEvent;
pub use roster_item::RosterItem;

mod presence_event;
mod roster_item;
