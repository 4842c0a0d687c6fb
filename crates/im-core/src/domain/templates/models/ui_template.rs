// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{BTreeMap, HashMap};

use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::presence::models::PresenceShow;
use crate::domain::shared::models::TimeProvider;

use super::{ChatState, MessageDirection, OtrEvent, PrefixContext, PrefixFormat, TemplateKey};

/// User configurable strings for presence icons, labels and message prefixes.
///
/// Only overrides are stored, every lookup falls back to `TemplateKey::default_value`.
/// Serializes as a flat map of dotted identifiers to strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct UITemplate {
    overrides: HashMap<TemplateKey, String>,
}

impl UITemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a template from a configuration loaded by the settings layer. Entries with an
    /// unknown key are skipped.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut template = Self::default();

        for (key, value) in entries {
            let key = key.as_ref();
            match key.parse::<TemplateKey>() {
                Ok(template_key) => template.set(template_key, value),
                Err(_) => warn!(key, "Ignoring unknown template key"),
            }
        }

        template
    }

    /// The configured overrides keyed by their identifier, for persisting.
    pub fn entries(&self) -> BTreeMap<String, String> {
        self.overrides
            .iter()
            .map(|(key, value)| (key.identifier().to_string(), value.clone()))
            .collect()
    }

    /// The configured value or the default. `None` only for unset HTML formats.
    pub fn value(&self, key: TemplateKey) -> Option<&str> {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .or_else(|| key.default_value())
    }

    pub fn get(&self, key: TemplateKey) -> &str {
        self.value(key).unwrap_or_default()
    }

    pub fn set(&mut self, key: TemplateKey, value: impl Into<String>) {
        self.overrides.insert(key, value.into());
    }

    /// Drops the override for `key`, returning it.
    pub fn reset(&mut self, key: TemplateKey) -> Option<String> {
        self.overrides.remove(&key)
    }
}

impl UITemplate {
    pub fn presence_icon(&self, show: PresenceShow) -> &str {
        self.get(show.icon_key())
    }

    /// The label describing `show`. Plain online presence has none.
    pub fn presence_label(&self, show: PresenceShow) -> &str {
        show.label_key().map(|key| self.get(key)).unwrap_or_default()
    }

    pub fn offline_icon(&self) -> &str {
        self.get(TemplateKey::PresenceIconOffline)
    }

    pub fn unsubscribed_icon(&self) -> &str {
        self.get(TemplateKey::PresenceIconUnsubscribed)
    }

    pub fn secure_symbol(&self, secure: bool) -> &str {
        self.get(if secure {
            TemplateKey::OtrSecure
        } else {
            TemplateKey::OtrInsecure
        })
    }

    pub fn otr_label(&self, event: OtrEvent) -> &str {
        self.get(event.template_key())
    }

    pub fn chat_state_label(&self, state: ChatState) -> Option<&str> {
        state.template_key().map(|key| self.get(key))
    }

    pub fn msg_prefix_format(&self, direction: MessageDirection) -> &str {
        self.get(direction.prefix_format_key())
    }

    pub fn html_msg_format(&self, direction: MessageDirection) -> Option<&str> {
        self.value(direction.html_format_key())
    }
}

impl UITemplate {
    pub fn render_prefix(
        &self,
        format: &str,
        xid: &str,
        alias: &str,
        secure: bool,
        time: NaiveTime,
    ) -> String {
        PrefixFormat::new(format).render(&PrefixContext {
            xid,
            alias,
            secure_symbol: self.secure_symbol(secure),
            time,
        })
    }

    /// Renders the plain text prefix of a chat message line.
    pub fn msg_prefix(
        &self,
        direction: MessageDirection,
        xid: &str,
        alias: &str,
        secure: bool,
        time_provider: &dyn TimeProvider,
    ) -> String {
        self.render_prefix(
            self.msg_prefix_format(direction),
            xid,
            alias,
            secure,
            local_time(time_provider),
        )
    }

    /// Renders the prefix for HTML capable views, if an HTML format is configured.
    pub fn html_msg_prefix(
        &self,
        direction: MessageDirection,
        xid: &str,
        alias: &str,
        secure: bool,
        time_provider: &dyn TimeProvider,
    ) -> Option<String> {
        let format = self.html_msg_format(direction)?;
        Some(self.render_prefix(format, xid, alias, secure, local_time(time_provider)))
    }
}

impl From<BTreeMap<String, String>> for UITemplate {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self::from_entries(value)
    }
}

impl From<UITemplate> for BTreeMap<String, String> {
    fn from(value: UITemplate) -> Self {
        value.entries()
    }
}

fn local_time(time_provider: &dyn TimeProvider) -> NaiveTime {
    time_provider.now().with_timezone(&Local).time()
}
