//! Landing screen where a visitor picks buyer or seller.

use serde::Serialize;

use crate::guard::Route;
use crate::session::Role;

#[derive(Debug, Clone, Serialize)]
pub struct RoleCard {
    pub role: Role,
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: [&'static str; 3],
    pub action: &'static str,
    pub navigate_to: Route,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleSelectionView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub roles: [RoleCard; 2],
    pub footnote: &'static str,
}

pub fn view() -> RoleSelectionView {
    RoleSelectionView {
        title: "Welcome to MarketPlace",
        tagline: "Connect, collaborate, and grow your business. Choose your role to get started.",
        roles: [
            RoleCard {
                role: Role::Buyer,
                title: "Start as a Buyer",
                description: "Find the perfect products and services from trusted sellers. \
                              Browse, compare, and connect with top vendors.",
                highlights: [
                    "Access to verified sellers",
                    "Smart matching system",
                    "Secure messaging & documents",
                ],
                action: "Get Started as Buyer",
                navigate_to: Route::Onboarding(Role::Buyer),
            },
            RoleCard {
                role: Role::Seller,
                title: "Start as a Seller",
                description: "Showcase your products and services to potential buyers. \
                              Grow your business with powerful tools and insights.",
                highlights: [
                    "Reach qualified buyers",
                    "Professional storefront",
                    "Business analytics & tools",
                ],
                action: "Get Started as Seller",
                navigate_to: Route::Onboarding(Role::Seller),
            },
        ],
        footnote: "Not sure which role is right for you? You can always switch later in your settings.",
    }
}
