// im-core-client/im-core-integration-tests
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;

use im_core::dtos::{ChatState, OtrEvent, PresenceShow, TemplateKey, UITemplate};

#[test]
fn test_load_from_json_config() {
    let template: UITemplate = serde_json::from_str(
        r#"{
            "xmpp.presenceicon.away": "(away)",
            "chatstate.composing": "typing…",
            "otr.disabled": "",
            "unknown.key": "ignored"
        }"#,
    )
    .unwrap();

    assert_eq!(template.presence_icon(PresenceShow::Away), "(away)");
    assert_eq!(
        template.chat_state_label(ChatState::Composing),
        Some("typing…")
    );
    assert_eq!(template.otr_label(OtrEvent::Disabled), "");
    assert_eq!(template.otr_label(OtrEvent::GoneInsecure), "otr: gone insecure");
}

#[test]
fn test_persists_only_overrides() {
    let mut template = UITemplate::new();
    assert_eq!(serde_json::to_string(&template).unwrap(), "{}");

    template.set(TemplateKey::PresenceXa, "[gone] ");
    template.set(TemplateKey::PresenceIconChat, "🗨");

    assert_eq!(
        serde_json::to_string(&template).unwrap(),
        r#"{"xmpp.presence.xa":"[gone] ","xmpp.presenceicon.chat":"🗨"}"#
    );

    let reloaded = UITemplate::from(BTreeMap::from([
        ("xmpp.presence.xa".to_string(), "[gone] ".to_string()),
        ("xmpp.presenceicon.chat".to_string(), "🗨".to_string()),
    ]));
    assert_eq!(reloaded, template);
}

#[test]
fn test_set_never_removes_defaults() {
    let mut template = UITemplate::new();
    template.set(TemplateKey::ChatStateGone, "");

    assert_eq!(template.chat_state_label(ChatState::Gone), Some(""));
    assert_eq!(template.chat_state_label(ChatState::Inactive), Some("inactive"));

    template.reset(TemplateKey::ChatStateGone);
    assert_eq!(template.chat_state_label(ChatState::Gone), Some("gone"));
}
