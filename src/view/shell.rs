//! Page shell: static site metadata, the provider nesting and the navbar.
//!
//! Providers are plain values carried by every page template as `shell`;
//! `templates/base.html` wraps the page in one marker element per provider.
//! The nesting is fixed: data fetching, notifications, session, theme, then
//! navbar and page.

use crate::models::Identity;

/// Static document metadata, identical for every page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SiteMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SITE_METADATA: SiteMetadata = SiteMetadata {
    title: "TourneyPro",
    description: "Tournament management system",
    icon: "/favicon.ico",
};

/// Stylesheet served from the static directory.
pub const STYLESHEET: &str = "/static/styles.css";

/// Data-fetching context: where client-side queries are sent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataFetchingContext {
    pub api_base: String,
}

impl Default for DataFetchingContext {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
        }
    }
}

/// Severity of a notification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    Info,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Notifications pending for this page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NotificationContext {
    pub notifications: Vec<Notification>,
}

impl NotificationContext {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            kind,
            message: message.into(),
        });
    }
}

/// Session context: the signed-in identity, if any.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionContext {
    pub identity: Option<Identity>,
}

/// Theme context: the theme is applied through the `class` attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThemeContext {
    pub attribute: &'static str,
    /// Theme used until the client resolves one; "system" follows the OS.
    pub default_theme: &'static str,
    pub enable_system: bool,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self {
            attribute: "class",
            default_theme: "system",
            enable_system: true,
        }
    }
}

/// The provider bundle for one page render.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Shell {
    pub data: DataFetchingContext,
    pub notifications: NotificationContext,
    pub session: SessionContext,
    pub theme: ThemeContext,
}

impl Shell {
    /// Shell with default providers and the given signed-in identity.
    pub fn new(identity: Option<Identity>) -> Self {
        Self {
            session: SessionContext { identity },
            ..Self::default()
        }
    }

    pub fn metadata(&self) -> SiteMetadata {
        SITE_METADATA
    }

    pub fn stylesheet(&self) -> &'static str {
        STYLESHEET
    }
}
