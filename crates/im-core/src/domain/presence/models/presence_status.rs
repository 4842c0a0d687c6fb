// im-core-client/im-core
//
// Copyright: 2024, The im-core developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::templates::models::UITemplate;

use super::PresenceShow;

/// The presence of one resource. Replaced as a whole by the next update for that resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresenceStatus {
    show: PresenceShow,
    raw_show: Option<String>,
    status: Option<String>,
    icon: Option<String>,
}

impl PresenceStatus {
    pub fn new(show: Option<&str>, status: Option<&str>) -> Self {
        Self {
            show: PresenceShow::classify(show),
            raw_show: show.map(ToString::to_string),
            status: status.map(ToString::to_string),
            icon: None,
        }
    }

    /// An available presence without `<show/>` and without status text.
    pub fn available() -> Self {
        Self::default()
    }

    /// Uses `icon` instead of the configured icon for this presence.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl PresenceStatus {
    pub fn show(&self) -> PresenceShow {
        self.show
    }

    pub fn raw_show(&self) -> Option<&str> {
        self.raw_show.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether the resource sent no `<show/>` at all.
    pub fn is_bare(&self) -> bool {
        self.raw_show.is_none()
    }

    pub fn icon<'a>(&'a self, template: &'a UITemplate) -> &'a str {
        match &self.icon {
            Some(icon) => icon.as_str(),
            None => template.presence_icon(self.show),
        }
    }

    pub fn label<'a>(&self, template: &'a UITemplate) -> &'a str {
        template.presence_label(self.show)
    }
}
