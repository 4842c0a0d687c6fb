// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumIter};

use crate::domain::templates::models::TemplateKey;

/// The availability of a single resource as announced by its `<show/>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PresenceShow {
    #[default]
    Online,
    Away,
    Chat,
    Dnd,
    Xa,
}

impl PresenceShow {
    /// Classifies a raw `<show/>` value. Anything unrecognized, as well as a missing
    /// value, means the resource is plainly online.
    pub fn classify(show: Option<&str>) -> Self {
        match show {
            Some("away") => PresenceShow::Away,
            Some("chat") => PresenceShow::Chat,
            Some("dnd") => PresenceShow::Dnd,
            Some("xa") => PresenceShow::Xa,
            _ => PresenceShow::Online,
        }
    }

    pub fn icon_key(self) -> TemplateKey {
        match self {
            PresenceShow::Online => TemplateKey::PresenceIconOnline,
            PresenceShow::Away => TemplateKey::PresenceIconAway,
            PresenceShow::Chat => TemplateKey::PresenceIconChat,
            PresenceShow::Dnd => TemplateKey::PresenceIconDnd,
            PresenceShow::Xa => TemplateKey::PresenceIconXa,
        }
    }

    pub fn label_key(self) -> Option<TemplateKey> {
        match self {
            PresenceShow::Online => None,
            PresenceShow::Away => Some(TemplateKey::PresenceAway),
            PresenceShow::Chat => Some(TemplateKey::PresenceChat),
            PresenceShow::Dnd => Some(TemplateKey::PresenceDnd),
            PresenceShow::Xa => Some(TemplateKey::PresenceXa),
        }
    }
}
