// im-core-client/im-core-integration-tests
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;

use im_core::dtos::{PresenceEvent, PresenceShow, ResourceId, RosterItem, UITemplate};
use im_core::{PresenceOutcome, Roster, RosterError};

use super::bare;

fn roster() -> Roster {
    let roster = Roster::new();
    roster.load([
        RosterItem::new(bare("bob@example.com"))
            .with_name("Bob")
            .with_subscription("both")
            .with_group("Friends"),
        RosterItem::new(bare("carol@example.com"))
            .with_name("Carol")
            .with_subscription("to")
            .with_group("Friends"),
        RosterItem::new(bare("dave@example.com"))
            .with_name("Dave")
            .with_subscription("from"),
        RosterItem::new(bare("erin@example.com"))
            .with_name("Erin")
            .with_subscription("remove"),
    ]);
    roster
}

#[test]
fn test_display_labels() {
    let roster = roster();
    let template = UITemplate::new();

    roster
        .handle_presence(
            PresenceEvent::available("bob@example.com/phone")
                .with_show("away")
                .with_status("brb"),
        )
        .unwrap();
    roster.add_unread(&bare("bob@example.com"), 2).unwrap();

    assert_eq!(
        roster.display_labels(&template),
        vec![
            "Friends".to_string(),
            "🟡 Bob* (brb)".to_string(),
            "🔴 Carol".to_string(),
            "⚪ Dave".to_string(),
        ]
    );
    assert_eq!(roster.display_label(&bare("erin@example.com"), &template), None);
}

#[test]
fn test_tooltip() {
    let roster = roster();

    assert_eq!(
        roster.tooltip(&bare("carol@example.com")),
        Some("carol@example.com subscription: to".to_string())
    );
    assert_eq!(roster.tooltip(&bare("erin@example.com")), None);
}

#[test]
fn test_chat_resource_wins() {
    let roster = roster();
    let bob = bare("bob@example.com");

    for event in [
        PresenceEvent::available("bob@example.com/desktop"),
        PresenceEvent::available("bob@example.com/phone").with_show("chat"),
        PresenceEvent::available("bob@example.com/laptop").with_show("xa"),
    ] {
        roster.handle_presence(event).unwrap();
    }

    assert_eq!(
        roster.relevant_presence(&bob).map(|p| p.show()),
        Some(PresenceShow::Chat)
    );
    assert_eq!(
        roster.display_label(&bob, &UITemplate::new()),
        Some("💬 Bob".to_string())
    );
}

#[test]
fn test_unavailable_resource_is_removed() {
    let roster = roster();
    let bob = bare("bob@example.com");

    roster
        .handle_presence(PresenceEvent::available("bob@example.com/desktop").with_show("dnd"))
        .unwrap();
    roster
        .handle_presence(PresenceEvent::available("bob@example.com/phone"))
        .unwrap();
    assert_eq!(
        roster.relevant_presence(&bob).map(|p| p.show()),
        Some(PresenceShow::Online)
    );

    let outcome = roster
        .handle_presence(PresenceEvent::unavailable("bob@example.com/phone"))
        .unwrap();
    assert_eq!(
        outcome,
        PresenceOutcome::Removed {
            user: bob.clone(),
            resource: Some(ResourceId::from("phone"))
        }
    );
    assert_eq!(
        roster.relevant_presence(&bob).map(|p| p.show()),
        Some(PresenceShow::Dnd)
    );

    roster
        .handle_presence(PresenceEvent::unavailable("bob@example.com/desktop"))
        .unwrap();
    assert_eq!(roster.relevant_presence(&bob), None);
    assert_eq!(
        roster.display_label(&bob, &UITemplate::new()),
        Some("🔴 Bob".to_string())
    );
}

#[test]
fn test_unavailable_bare_jid_clears_all_resources() {
    let roster = roster();
    let bob = bare("bob@example.com");

    roster
        .handle_presence(PresenceEvent::available("bob@example.com/desktop"))
        .unwrap();
    roster
        .handle_presence(PresenceEvent::available("bob@example.com/phone").with_show("chat"))
        .unwrap();

    assert_eq!(
        roster
            .handle_presence(PresenceEvent::unavailable("bob@example.com"))
            .unwrap(),
        PresenceOutcome::Removed {
            user: bob.clone(),
            resource: None
        }
    );
    assert_eq!(roster.relevant_presence(&bob), None);
}

#[test]
fn test_presence_from_unknown_contact() {
    let roster = roster();

    for event in [
        PresenceEvent::available("mallory@example.com/x"),
        PresenceEvent::unavailable("erin@example.com"),
    ] {
        let result = roster.handle_presence(event);
        assert!(
            matches!(result, Err(RosterError::UnknownContact(_))),
            "{result:?}"
        );
    }
    assert_eq!(roster.display_label(&bare("mallory@example.com"), &UITemplate::new()), None);
}

#[test]
fn test_unavailable_from_unknown_resource_is_ignored() {
    let roster = roster();
    let bob = bare("bob@example.com");

    roster
        .handle_presence(PresenceEvent::available("bob@example.com/desktop").with_show("away"))
        .unwrap();

    assert_eq!(
        roster
            .handle_presence(PresenceEvent::unavailable("bob@example.com/tablet"))
            .unwrap(),
        PresenceOutcome::Ignored
    );
    assert_eq!(
        roster.relevant_presence(&bob).map(|p| p.show()),
        Some(PresenceShow::Away)
    );
}

#[test]
fn test_reload_keeps_presence_and_unread() {
    let roster = roster();
    let bob = bare("bob@example.com");

    roster
        .handle_presence(PresenceEvent::available("bob@example.com/phone").with_status("hi"))
        .unwrap();
    roster.add_unread(&bob, 1).unwrap();

    roster.load([RosterItem::new(bob.clone()).with_name("Robert")]);

    assert_eq!(
        roster.display_label(&bob, &UITemplate::new()),
        Some("🟢 Robert* (hi)".to_string())
    );

    roster.mark_read(&bob).unwrap();
    assert_eq!(
        roster.display_label(&bob, &UITemplate::new()),
        Some("🟢 Robert (hi)".to_string())
    );
}

#[test]
fn test_concurrent_updates_and_renders() {
    let roster = Arc::new(roster());
    let template = Arc::new(UITemplate::new());

    let writers = (0..4).map(|idx| {
        let roster = roster.clone();
        thread::spawn(move || {
            for round in 0..100 {
                let show = if round % 2 == 0 { "away" } else { "chat" };
                roster
                    .handle_presence(
                        PresenceEvent::available(format!("bob@example.com/r{idx}")).with_show(show),
                    )
                    .unwrap();
            }
        })
    });

    let readers = (0..2).map(|_| {
        let roster = roster.clone();
        let template = template.clone();
        thread::spawn(move || {
            for _ in 0..100 {
                let label = roster
                    .display_label(&bare("bob@example.com"), &template)
                    .unwrap();
                assert!(label.ends_with(" Bob"), "{label}");
            }
        })
    });

    let handles = writers.chain(readers).collect::<Vec<_>>();
    for handle in handles {
        handle.join().unwrap();
    }

    // Every writer finished with a chat presence.
    assert_eq!(
        roster
            .relevant_presence(&bare("bob@example.com"))
            .map(|p| p.show()),
        Some(PresenceShow::Chat)
    );
}
