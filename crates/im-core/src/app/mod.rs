// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use roster::{PresenceOutcome, Roster, RosterError};

pub mod dtos;
mod roster;
