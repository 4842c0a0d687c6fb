// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The closed set of configurable template strings. The serialized form is the dotted
/// identifier under which the settings layer persists the value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum TemplateKey {
    #[strum(serialize = "xmpp.presence.away")]
    PresenceAway,
    #[strum(serialize = "xmpp.presence.chat")]
    PresenceChat,
    #[strum(serialize = "xmpp.presence.dnd")]
    PresenceDnd,
    #[strum(serialize = "xmpp.presence.xa")]
    PresenceXa,

    #[strum(serialize = "xmpp.presenceicon.online")]
    PresenceIconOnline,
    #[strum(serialize = "xmpp.presenceicon.offline")]
    PresenceIconOffline,
    #[strum(serialize = "xmpp.presenceicon.away")]
    PresenceIconAway,
    #[strum(serialize = "xmpp.presenceicon.chat")]
    PresenceIconChat,
    #[strum(serialize = "xmpp.presenceicon.dnd")]
    PresenceIconDnd,
    #[strum(serialize = "xmpp.presenceicon.xa")]
    PresenceIconXa,
    #[strum(serialize = "xmpp.presenceicon.unsubscribed")]
    PresenceIconUnsubscribed,

    #[strum(serialize = "otr.gonesecure")]
    OtrGoneSecure,
    #[strum(serialize = "otr.goneinsecure")]
    OtrGoneInsecure,
    #[strum(serialize = "otr.disabled")]
    OtrDisabled,
    #[strum(serialize = "otr.secure")]
    OtrSecure,
    #[strum(serialize = "otr.unsecure")]
    OtrInsecure,

    #[strum(serialize = "chatstate.composing")]
    ChatStateComposing,
    #[strum(serialize = "chatstate.paused")]
    ChatStatePaused,
    #[strum(serialize = "chatstate.inactive")]
    ChatStateInactive,
    #[strum(serialize = "chatstate.gone")]
    ChatStateGone,

    #[strum(serialize = "msg.in.format")]
    MsgInFormat,
    #[strum(serialize = "msg.out.format")]
    MsgOutFormat,
    #[strum(serialize = "msg.htmlin.format")]
    HtmlMsgInFormat,
    #[strum(serialize = "msg.htmlout.format")]
    HtmlMsgOutFormat,
}

impl TemplateKey {
    pub fn identifier(self) -> &'static str {
        self.into()
    }

    /// The built-in value used when no override is configured. Only the optional HTML
    /// message formats have none.
    pub fn default_value(self) -> Option<&'static str> {
        use TemplateKey::*;

        let value = match self {
            PresenceAway => "[away] ",
            PresenceChat => "[chat] ",
            PresenceDnd => "[dnd] ",
            PresenceXa => "[xa] ",
            PresenceIconOnline => "🟢",
            PresenceIconOffline => "🔴",
            PresenceIconAway => "🟡",
            PresenceIconChat => "💬",
            PresenceIconDnd => "🟠",
            PresenceIconXa => "🟣",
            PresenceIconUnsubscribed => "⚪",
            OtrGoneSecure => "otr: gone secure",
            OtrGoneInsecure => "otr: gone insecure",
            OtrDisabled => "otr disabled",
            OtrSecure => "🔒",
            OtrInsecure => "",
            ChatStateComposing => "composing",
            ChatStatePaused => "paused",
            ChatStateInactive => "inactive",
            ChatStateGone => "gone",
            MsgInFormat => "< %s(%t) %a: ",
            MsgOutFormat => "> %s(%t) %a: ",
            HtmlMsgInFormat | HtmlMsgOutFormat => return None,
        };
        Some(value)
    }
}
