//! Settings screen. Only the logout action does anything; the rest is
//! display-only.

use serde::Serialize;

use crate::guard::Route;
use crate::session::Role;

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePlaceholders {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingRow {
    pub title: &'static str,
    pub description: &'static str,
    /// Switch state for toggle rows, `None` for button rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsSection {
    pub title: &'static str,
    pub rows: Vec<SettingRow>,
}

/// An account action. Only logout carries an endpoint; the others are
/// display-only buttons.
#[derive(Debug, Clone, Serialize)]
pub struct AccountAction {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<Route>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub role: Role,
    pub profile: ProfilePlaceholders,
    pub sections: Vec<SettingsSection>,
    pub account_actions: Vec<AccountAction>,
}

fn switch(title: &'static str, description: &'static str, enabled: bool) -> SettingRow {
    SettingRow {
        title,
        description,
        enabled: Some(enabled),
        action: None,
    }
}

fn button(title: &'static str, description: &'static str, action: &'static str) -> SettingRow {
    SettingRow {
        title,
        description,
        enabled: None,
        action: Some(action),
    }
}

pub fn view(role: Role) -> SettingsView {
    let bio = match role {
        Role::Buyer => "Tell sellers about yourself...",
        Role::Seller | Role::Unset => "Tell buyers about yourself...",
    };

    SettingsView {
        title: "Settings",
        subtitle: "Manage your account preferences and privacy settings",
        role,
        profile: ProfilePlaceholders {
            first_name: "Nethaji",
            last_name: "K",
            email: "nethaji.k@example.com",
            phone: "+91 826 123-4567",
            bio,
        },
        sections: vec![
            SettingsSection {
                title: "Notifications",
                rows: vec![
                    switch("Email Notifications", "Receive updates via email", false),
                    switch(
                        "New Messages",
                        "Get notified when you receive new messages",
                        false,
                    ),
                    switch("Project Updates", "Notifications about project milestones", false),
                    switch("Marketing Emails", "Receive promotional content and updates", false),
                ],
            },
            SettingsSection {
                title: "Privacy & Security",
                rows: vec![
                    button("Change Password", "Update your account password", "Update Password"),
                    button(
                        "Two-Factor Authentication",
                        "Add an extra layer of security to your account",
                        "Enable 2FA",
                    ),
                    switch("Profile Visibility", "Control who can see your profile", true),
                ],
            },
            SettingsSection {
                title: "Billing",
                rows: vec![
                    button("Payment Methods", "Manage your saved payment methods", "Manage"),
                    button("Billing History", "View your past transactions", "View History"),
                    button("Tax Information", "Update your tax details", "Update"),
                ],
            },
            SettingsSection {
                title: "Help & Support",
                rows: vec![
                    button("Contact Support", "Get help from our support team", "Contact Us"),
                    button("Documentation", "Learn how to use the platform", "View Docs"),
                ],
            },
        ],
        account_actions: vec![
            AccountAction {
                label: "Switch Role",
                endpoint: None,
                navigate_to: None,
            },
            AccountAction {
                label: "Log Out",
                endpoint: Some("/api/session/logout"),
                navigate_to: Some(Route::RoleSelection),
            },
        ],
    }
}
