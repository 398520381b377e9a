//! User grid view model

use serde::Serialize;
use tourvisto_core::types::UserPage;
use tourvisto_core::utils::format_date;
use tourvisto_core::{UserRecord, UserStatus};

/// One grid row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    /// Display name
    pub name: String,
    /// Avatar URL
    pub image_url: Option<String>,
    /// Email address
    pub email: String,
    /// Join date as `January 05, 2025`
    pub joined_at: String,
    /// Role
    pub status: UserStatus,
    /// CSS class of the status badge
    pub badge_class: &'static str,
}

impl From<UserRecord> for UserRow {
    fn from(user: UserRecord) -> Self {
        let badge_class = match user.status {
            UserStatus::User => "bg-success-50",
            UserStatus::Admin => "bg-light-300",
        };

        Self {
            joined_at: format_date(&user.joined_at),
            name: user.name,
            image_url: user.image_url,
            email: user.email,
            status: user.status,
            badge_class,
        }
    }
}

/// User grid page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersView {
    /// Rows on this page
    pub users: Vec<UserRow>,
    /// Total users
    pub total: u64,
}

impl From<UserPage> for UsersView {
    fn from(page: UserPage) -> Self {
        Self {
            users: page.users.into_iter().map(UserRow::from).collect(),
            total: page.total,
        }
    }
}
