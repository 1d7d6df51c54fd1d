//! Profile page rendering: ViewState in, HTML out. No I/O.

use super::shell::Shell;
use crate::models::{Identity, ProfileStats};
use crate::profile::ViewState;
use askama::Template;

/// Icons used by the statistics rows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Icon {
    Users,
    Trophy,
    CalendarDays,
}

impl Icon {
    pub fn id(self) -> &'static str {
        match self {
            Icon::Users => "users",
            Icon::Trophy => "trophy",
            Icon::CalendarDays => "calendar-days",
        }
    }
}

/// One labeled row of the statistics card.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatRow {
    pub icon: Icon,
    pub label: &'static str,
    pub value: u64,
}

/// Rows in display order: joined, won, organized.
pub fn stat_rows(stats: &ProfileStats) -> [StatRow; 3] {
    [
        StatRow {
            icon: Icon::Users,
            label: "Tournaments Joined",
            value: stats.tournaments_joined,
        },
        StatRow {
            icon: Icon::Trophy,
            label: "Matches Won",
            value: stats.matches_won,
        },
        StatRow {
            icon: Icon::CalendarDays,
            label: "Tournaments Organized",
            value: stats.tournaments_organized,
        },
    ]
}

/// Text of a message panel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Message {
    pub title: &'static str,
    pub message: &'static str,
}

pub const AUTH_ERROR: Message = Message {
    title: "Authentication Error",
    message: "Failed to load session. Please try again later.",
};

pub const UNAUTHENTICATED: Message = Message {
    title: "Authentication Required",
    message: "Please sign in to view your profile",
};

pub const PROFILE_MISSING: Message = Message {
    title: "User Profile Not Found",
    message: "Please check your account or try again later",
};

/// `templates/profile.html`: profile card and statistics card.
#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfilePage {
    pub shell: Shell,
    pub identity: Identity,
    pub rows: [StatRow; 3],
}

/// `templates/message_panel.html`: the panel shared by every non-loaded state.
#[derive(Template)]
#[template(path = "message_panel.html")]
pub struct MessagePage {
    pub shell: Shell,
    pub message: Message,
}

/// Render the whole profile page for a view state.
pub fn render(shell: Shell, state: &ViewState) -> Result<String, askama::Error> {
    let message = match state {
        ViewState::Loaded(identity, stats) => {
            return ProfilePage {
                shell,
                identity: identity.clone(),
                rows: stat_rows(stats),
            }
            .render();
        }
        ViewState::AuthError => AUTH_ERROR,
        ViewState::Unauthenticated => UNAUTHENTICATED,
        ViewState::ProfileMissing => PROFILE_MISSING,
    };
    MessagePage { shell, message }.render()
}
