// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use itertools::Itertools;
use jid::BareJid;

use crate::domain::presence::models::Presence;
use crate::domain::templates::models::UITemplate;

use super::Subscription;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ContactError {
    #[error("'{0}' is not a group")]
    NotAGroup(String),
    #[error("Group '{member}' cannot be added to group '{group}'")]
    NestedGroup { group: String, member: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactKind {
    Individual(Presence),
    Group(Vec<Contact>),
}

/// An entry of the contact list, either a single contact or a group of contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub xid: Option<BareJid>,
    pub unread: u32,
    pub subscription: Option<Subscription>,
    pub kind: ContactKind,
}

impl Contact {
    pub fn individual(name: impl Into<String>, xid: Option<BareJid>) -> Self {
        Self {
            name: name.into(),
            xid,
            unread: 0,
            subscription: None,
            kind: ContactKind::Individual(Presence::new()),
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            xid: None,
            unread: 0,
            subscription: None,
            kind: ContactKind::Group(vec![]),
        }
    }

    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = Some(subscription);
        self
    }
}

impl Contact {
    pub fn is_group(&self) -> bool {
        matches!(self.kind, ContactKind::Group(_))
    }

    /// Appends `contact` to this group. Groups are one level deep.
    pub fn add_member(&mut self, contact: Contact) -> Result<(), ContactError> {
        if contact.is_group() {
            return Err(ContactError::NestedGroup {
                group: self.name.clone(),
                member: contact.name,
            });
        }

        match &mut self.kind {
            ContactKind::Group(members) => {
                members.push(contact);
                Ok(())
            }
            ContactKind::Individual(_) => Err(ContactError::NotAGroup(self.name.clone())),
        }
    }

    pub fn members(&self) -> &[Contact] {
        match &self.kind {
            ContactKind::Group(members) => members.as_slice(),
            ContactKind::Individual(_) => &[],
        }
    }

    pub fn presence(&self) -> Option<&Presence> {
        match &self.kind {
            ContactKind::Individual(presence) => Some(presence),
            ContactKind::Group(_) => None,
        }
    }

    pub fn presence_mut(&mut self) -> Option<&mut Presence> {
        match &mut self.kind {
            ContactKind::Individual(presence) => Some(presence),
            ContactKind::Group(_) => None,
        }
    }

    pub fn add_unread(&mut self, count: u32) {
        self.unread = self.unread.saturating_add(count);
    }

    pub fn mark_read(&mut self) {
        self.unread = 0;
    }

    /// Finds the individual contact with address `xid`, either this one or one of its members.
    pub fn find(&self, xid: &BareJid) -> Option<&Contact> {
        if self.is_individual_with(xid) {
            return Some(self);
        }
        self.members().iter().find_map(|member| member.find(xid))
    }

    pub fn find_mut(&mut self, xid: &BareJid) -> Option<&mut Contact> {
        if self.is_individual_with(xid) {
            return Some(self);
        }
        match &mut self.kind {
            ContactKind::Group(members) => members
                .iter_mut()
                .find_map(|member| member.find_mut(xid)),
            ContactKind::Individual(_) => None,
        }
    }

    fn is_individual_with(&self, xid: &BareJid) -> bool {
        !self.is_group() && self.xid.as_ref() == Some(xid)
    }
}

impl Contact {
    /// The text shown in the contact list, e.g. `"🟡 Bob* (brb)"`.
    pub fn display_label(&self, template: &UITemplate) -> String {
        let ContactKind::Individual(presence) = &self.kind else {
            return self.name.clone();
        };

        let relevant = presence.relevant_presence();

        let icon = match relevant {
            Some(status) => status.icon(template),
            None => match self.subscription {
                Some(subscription) if !subscription.receives_presence() => {
                    template.unsubscribed_icon()
                }
                _ => template.offline_icon(),
            },
        };

        let unread_marker = if self.unread != 0 { "*" } else { "" };

        match relevant.and_then(|status| status.status()) {
            Some(status) => format!("{} {}{} ({})", icon, self.name, unread_marker, status),
            None => format!("{} {}{}", icon, self.name, unread_marker),
        }
    }

    /// Address and subscription state, separated by a space. Missing parts are left out.
    pub fn tooltip(&self) -> String {
        let subscription = self
            .subscription
            .map(|subscription| format!("subscription: {}", subscription));

        self.xid
            .as_ref()
            .map(ToString::to_string)
            .into_iter()
            .chain(subscription)
            .join(" ")
    }
}
