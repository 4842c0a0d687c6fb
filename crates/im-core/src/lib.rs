// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::dtos;
pub use app::{PresenceOutcome, Roster, RosterError};

#[cfg(any(test, feature = "test"))]
pub mod test;

pub mod app;
pub mod domain;
