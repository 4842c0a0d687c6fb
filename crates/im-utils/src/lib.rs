// im-core-client/im-utils
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
