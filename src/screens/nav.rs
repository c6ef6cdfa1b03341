//! Navigation chrome shown above every screen.

use serde::Serialize;

use crate::guard::Route;
use crate::session::{Role, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub href: Route,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavView {
    pub brand: &'static str,
    pub home: Route,
    pub items: Vec<NavItem>,
    pub role: Role,
    /// The logout button is shown whenever a role is set.
    pub show_logout: bool,
}

/// Build the navigation bar. No links until the session has a role and has
/// finished onboarding.
pub fn view(state: SessionState, current: Option<Route>) -> NavView {
    let items = if state.role.is_set() && state.is_onboarded {
        let matches_label = match state.role {
            Role::Buyer => "Find Sellers",
            Role::Seller | Role::Unset => "Find Buyers",
        };
        [
            (Route::Dashboard, "Dashboard", "home"),
            (Route::Matches, matches_label, "users"),
            (Route::Messages, "Messages", "message_square"),
            (Route::Documents, "Documents", "file_text"),
            (Route::Settings, "Settings", "settings"),
        ]
        .into_iter()
        .map(|(href, label, icon)| NavItem {
            href,
            label,
            icon,
            active: current == Some(href),
        })
        .collect()
    } else {
        Vec::new()
    };

    NavView {
        brand: "MarketPlace",
        home: Route::RoleSelection,
        items,
        role: state.role,
        show_logout: state.role.is_set(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_onboarded() {
        let unset = view(SessionState::default(), None);
        assert!(unset.items.is_empty());
        assert!(!unset.show_logout);

        let pending = view(
            SessionState {
                role: Role::Buyer,
                is_onboarded: false,
            },
            None,
        );
        assert!(pending.items.is_empty());
        assert!(pending.show_logout);
    }

    #[test]
    fn matches_label_and_active_item() {
        let nav = view(
            SessionState {
                role: Role::Buyer,
                is_onboarded: true,
            },
            Some(Route::Matches),
        );
        let labels: Vec<_> = nav.items.iter().map(|i| i.label).collect();
        assert_eq!(
            labels,
            ["Dashboard", "Find Sellers", "Messages", "Documents", "Settings"]
        );
        assert!(nav.items[1].active);
        assert!(!nav.items[0].active);

        let seller = view(
            SessionState {
                role: Role::Seller,
                is_onboarded: true,
            },
            None,
        );
        assert_eq!(seller.items[1].label, "Find Buyers");
    }
}
