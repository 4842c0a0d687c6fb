// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use jid::{BareJid, Jid};
use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::app::dtos::{PresenceEvent, RosterItem};
use crate::domain::contacts::models::{Contact, ContactKind, Subscription};
use crate::domain::presence::models::{Presence, PresenceStatus};
use crate::domain::shared::models::ResourceId;
use crate::domain::templates::models::UITemplate;

#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    #[error("Invalid JID '{jid}': {error}")]
    InvalidJid {
        jid: String,
        #[source]
        error: jid::Error,
    },
    #[error("Unknown contact {0}")]
    UnknownContact(BareJid),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresenceOutcome {
    /// The presence of `resource` was stored.
    Updated { user: BareJid, resource: ResourceId },
    /// `resource` went offline. `None` if all resources of `user` went offline.
    Removed {
        user: BareJid,
        resource: Option<ResourceId>,
    },
    /// `user` asks to see our presence.
    SubscriptionRequested(BareJid),
    /// The presence doesn't affect the contact list.
    Ignored,
}

/// The contact list. All presence updates and label rendering go through the roster's lock
/// so that aggregation always sees a consistent set of resources.
#[derive(Default)]
pub struct Roster {
    contacts: RwLock<Vec<Contact>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contact list. Presence and unread counts of contacts that are still
    /// present are carried over.
    #[instrument(skip_all)]
    pub fn load(&self, items: impl IntoIterator<Item = RosterItem>) {
        let mut contacts = self.contacts.write();

        let mut previous = HashMap::new();
        collect_individuals(std::mem::take(&mut *contacts), &mut previous);

        let mut loaded: Vec<Contact> = vec![];

        for item in items {
            let subscription = match item.subscription.as_deref() {
                Some("remove") => {
                    debug!(jid = %item.jid, "Skipping removed roster item");
                    continue;
                }
                Some(subscription) => match subscription.parse::<Subscription>() {
                    Ok(subscription) => Some(subscription),
                    Err(_) => {
                        warn!(jid = %item.jid, subscription, "Unknown subscription state");
                        None
                    }
                },
                None => None,
            };

            let name = item.name.unwrap_or_else(|| item.jid.to_string());
            let mut contact = Contact::individual(name, Some(item.jid.clone()));
            contact.subscription = subscription;

            if let Some((presence, unread)) = previous.remove(&item.jid) {
                contact.kind = ContactKind::Individual(presence);
                contact.unread = unread;
            }

            let Some(group_name) = item.group else {
                loaded.push(contact);
                continue;
            };

            let idx = match loaded
                .iter()
                .position(|c| c.is_group() && c.name == group_name)
            {
                Some(idx) => idx,
                None => {
                    loaded.push(Contact::group(group_name));
                    loaded.len() - 1
                }
            };

            if let Err(error) = loaded[idx].add_member(contact) {
                warn!(%error, "Failed to add contact to group");
            }
        }

        info!("Loaded {} roster entries", count_individuals(&loaded));
        *contacts = loaded;
    }

    #[instrument(skip(self), fields(from = %event.from))]
    pub fn handle_presence(&self, event: PresenceEvent) -> Result<PresenceOutcome, RosterError> {
        let jid = event
            .from
            .parse::<Jid>()
            .map_err(|error| RosterError::InvalidJid {
                jid: event.from.clone(),
                error,
            })?;
        let user = jid.to_bare();
        let resource = jid.resource_str().map(ResourceId::from);

        let is_unavailable = match event.type_.as_deref() {
            None => false,
            Some("unavailable") => true,
            Some("subscribe") => return Ok(PresenceOutcome::SubscriptionRequested(user)),
            Some(presence_type) => {
                debug!(presence_type, "Ignoring presence");
                return Ok(PresenceOutcome::Ignored);
            }
        };

        let mut contacts = self.contacts.write();
        let Some(presence) = find_mut(&mut contacts, &user).and_then(Contact::presence_mut)
        else {
            return Err(RosterError::UnknownContact(user));
        };

        if is_unavailable {
            let removed = match &resource {
                Some(resource) => presence.remove(resource).is_some(),
                None => {
                    let had_resources = !presence.is_empty();
                    presence.clear();
                    had_resources
                }
            };
            if !removed {
                debug!("Ignoring unavailable presence from unknown resource");
                return Ok(PresenceOutcome::Ignored);
            }
            return Ok(PresenceOutcome::Removed { user, resource });
        }

        let resource = resource.unwrap_or_else(ResourceId::bare);
        presence.update(
            resource.clone(),
            PresenceStatus::new(event.show.as_deref(), event.status.as_deref()),
        );
        Ok(PresenceOutcome::Updated { user, resource })
    }

    /// Adds `count` unread messages and returns the new total.
    pub fn add_unread(&self, jid: &BareJid, count: u32) -> Result<u32, RosterError> {
        self.with_contact_mut(jid, |contact| {
            contact.add_unread(count);
            contact.unread
        })
    }

    pub fn mark_read(&self, jid: &BareJid) -> Result<(), RosterError> {
        self.with_contact_mut(jid, Contact::mark_read)
    }

    pub fn relevant_presence(&self, jid: &BareJid) -> Option<PresenceStatus> {
        self.with_contact(jid, |contact| {
            contact
                .presence()
                .and_then(Presence::relevant_presence)
                .cloned()
        })
        .flatten()
    }

    pub fn display_label(&self, jid: &BareJid, template: &UITemplate) -> Option<String> {
        self.with_contact(jid, |contact| contact.display_label(template))
    }

    pub fn tooltip(&self, jid: &BareJid) -> Option<String> {
        self.with_contact(jid, Contact::tooltip)
    }

    /// Labels of the whole contact list, each group followed by its members.
    pub fn display_labels(&self, template: &UITemplate) -> Vec<String> {
        let contacts = self.contacts.read();
        contacts
            .iter()
            .flat_map(|contact| std::iter::once(contact).chain(contact.members()))
            .map(|contact| contact.display_label(template))
            .collect()
    }

    /// A copy of the contact list.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.read().clone()
    }
}

impl Roster {
    fn with_contact<T>(&self, jid: &BareJid, f: impl FnOnce(&Contact) -> T) -> Option<T> {
        let contacts = self.contacts.read();
        contacts.iter().find_map(|contact| contact.find(jid)).map(f)
    }

    fn with_contact_mut<T>(
        &self,
        jid: &BareJid,
        f: impl FnOnce(&mut Contact) -> T,
    ) -> Result<T, RosterError> {
        let mut contacts = self.contacts.write();
        find_mut(&mut contacts, jid)
            .map(f)
            .ok_or_else(|| RosterError::UnknownContact(jid.clone()))
    }
}

fn find_mut<'a>(contacts: &'a mut [Contact], jid: &BareJid) -> Option<&'a mut Contact> {
    contacts
        .iter_mut()
        .find_map(|contact| contact.find_mut(jid))
}

fn count_individuals(contacts: &[Contact]) -> usize {
    contacts
        .iter()
        .map(|contact| match &contact.kind {
            ContactKind::Individual(_) => 1,
            ContactKind::Group(members) => count_individuals(members),
        })
        .sum()
}

fn collect_individuals(contacts: Vec<Contact>, into: &mut HashMap<BareJid, (Presence, u32)>) {
    for contact in contacts {
        match contact.kind {
            ContactKind::Individual(presence) => {
                if let Some(xid) = contact.xid {
                    into.insert(xid, (presence, contact.unread));
                }
            }
            ContactKind::Group(members) => collect_individuals(members, into),
        }
    }
}
