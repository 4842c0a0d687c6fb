// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexMap;

use crate::domain::shared::models::ResourceId;

use super::{PresenceShow, PresenceStatus};

/// The presences of all connected resources of one contact.
#[derive(Debug, Clone, Default)]
pub struct Presence {
    /// Ordered by the time of their last update, the most recent one last.
    resources: IndexMap<ResourceId, PresenceStatus>,
}

impl Presence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, resource: ResourceId, status: PresenceStatus) {
        self.resources.shift_remove(&resource);
        self.resources.insert(resource, status);
    }

    /// Forgets a resource that went unavailable. The most recent update of the remaining
    /// resources takes over as the last update.
    pub fn remove(&mut self, resource: &ResourceId) -> Option<PresenceStatus> {
        self.resources.shift_remove(resource)
    }

    pub fn clear(&mut self) {
        self.resources.clear()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn resource(&self, resource: &ResourceId) -> Option<&PresenceStatus> {
        self.resources.get(resource)
    }

    pub fn resources(&self) -> impl Iterator<Item = (&ResourceId, &PresenceStatus)> {
        self.resources.iter()
    }

    pub fn last_updated(&self) -> Option<&PresenceStatus> {
        self.resources.last().map(|(_, status)| status)
    }

    /// Returns the presence that represents the contact as a whole.
    ///
    /// Priority in case of multiple connections:
    /// 1. chat
    /// 2. online (no show element available)
    /// 3. away, dnd or xa, in which case the last update wins
    pub fn relevant_presence(&self) -> Option<&PresenceStatus> {
        let mut relevant = self.last_updated();

        for status in self.resources.values() {
            if !status.is_bare() {
                if status.show() == PresenceShow::Chat {
                    return Some(status);
                }
                continue;
            }

            match relevant {
                Some(candidate) if candidate.show() == PresenceShow::Online => (),
                _ => relevant = Some(status),
            }
        }

        relevant
    }
}

/// Two presences are equal if they hold the same resources in the same update order.
impl PartialEq for Presence {
    fn eq(&self, other: &Self) -> bool {
        self.resources.iter().eq(other.resources.iter())
    }
}
