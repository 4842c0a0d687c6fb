// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use presence::Presence;
pub use presence_show::PresenceShow;
pub use presence_status::PresenceStatus;

mod presence;
mod presence_show;
mod presence_status;
