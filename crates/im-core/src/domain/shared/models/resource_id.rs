// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use im_utils::id_string;

id_string!(
    /// The resource part of a full JID, identifying one connection of a contact.
    ResourceId
);

impl ResourceId {
    /// The resource under which presence sent from a bare JID is tracked.
    pub fn bare() -> Self {
        ResourceId::from("")
    }
}
