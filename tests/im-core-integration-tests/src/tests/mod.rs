// im-core-client/im-core-integration-tests
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

mod roster;
mod ui_template;

pub fn bare(jid: &str) -> BareJid {
    jid.parse().expect("Invalid bare JID")
}
