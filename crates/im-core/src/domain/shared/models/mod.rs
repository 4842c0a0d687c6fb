// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use resource_id::ResourceId;
pub use time_provider::{SystemTimeProvider, TimeProvider};

mod resource_id;
mod time_provider;
