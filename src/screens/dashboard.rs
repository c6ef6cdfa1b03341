//! Dashboard: headline stats, recent activity and quick actions.

use serde::Serialize;

use crate::session::Role;

#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub action: &'static str,
    pub time: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub stats: Vec<Stat>,
    pub recent_activity: Vec<Activity>,
    pub quick_actions: Vec<QuickAction>,
}

const fn stat(title: &'static str, value: &'static str, icon: &'static str, change: &'static str) -> Stat {
    Stat {
        title,
        value,
        icon,
        change,
    }
}

const fn activity(action: &'static str, time: &'static str, status: &'static str) -> Activity {
    Activity {
        action,
        time,
        status,
    }
}

const fn quick(title: &'static str, description: &'static str, action: &'static str) -> QuickAction {
    QuickAction {
        title,
        description,
        action,
    }
}

/// Anything other than a buyer sees the seller dashboard.
pub fn view(role: Role) -> DashboardView {
    match role {
        Role::Buyer => DashboardView {
            title: "Welcome back!",
            subtitle: "Manage your purchases and connect with sellers",
            stats: vec![
                stat("Active Requests", "12", "package", "+2 this week"),
                stat("Saved Sellers", "8", "users", "+3 this month"),
                stat("Messages", "24", "message_square", "6 unread"),
                stat("Projects", "5", "check_circle", "2 completed"),
            ],
            recent_activity: vec![
                activity("New seller match found", "2 hours ago", "new"),
                activity("Message from TechSolutions Pro", "5 hours ago", "message"),
                activity("Proposal received for Web Development", "1 day ago", "proposal"),
                activity("Project milestone completed", "2 days ago", "completed"),
            ],
            quick_actions: vec![
                quick("Find Sellers", "Browse and connect with verified sellers", "Browse Now"),
                quick("Post Request", "Describe what you need and get proposals", "Post Request"),
                quick("View Messages", "Check your latest conversations", "View Messages"),
            ],
        },
        Role::Seller | Role::Unset => DashboardView {
            title: "Welcome back!",
            subtitle: "Grow your business and find new opportunities",
            stats: vec![
                stat("Revenue", "$12,450", "dollar_sign", "+15% this month"),
                stat("Active Buyers", "34", "users", "+8 this week"),
                stat("Messages", "47", "message_square", "12 unread"),
                stat("Conversion Rate", "24%", "trending_up", "+3% this month"),
            ],
            recent_activity: vec![
                activity("New buyer inquiry received", "1 hour ago", "new"),
                activity("Proposal accepted by GlobalCorp", "3 hours ago", "accepted"),
                activity("Payment received for Mobile App project", "1 day ago", "payment"),
                activity("New review: 5 stars from StartupX", "2 days ago", "review"),
            ],
            quick_actions: vec![
                quick("Find Buyers", "Discover new business opportunities", "Find Buyers"),
                quick("Update Portfolio", "Showcase your latest work", "Update Portfolio"),
                quick("View Analytics", "Track your business performance", "View Analytics"),
            ],
        },
    }
}
