//! Presentational screens.
//!
//! Screens read `(role, is_onboarded)` and return a view model built from
//! static mock data. They never mutate the session; the only write path a
//! screen offers is the logout action, which goes through the session
//! routes.

pub mod dashboard;
pub mod documents;
pub mod matches;
pub mod messages;
pub mod nav;
pub mod role_selection;
pub mod routes;
pub mod settings;

use serde::Serialize;

use crate::guard::Route;
use crate::onboarding::{Wizard, WizardView};
use crate::session::SessionState;

pub use routes::screen_routes;

/// The rendered content of one screen.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", content = "data", rename_all = "snake_case")]
pub enum ScreenView {
    RoleSelection(role_selection::RoleSelectionView),
    Onboarding(Box<WizardView>),
    Dashboard(dashboard::DashboardView),
    Messages(messages::MessagesView),
    Documents(documents::DocumentsView),
    Matches(matches::MatchesView),
    Settings(settings::SettingsView),
}

/// Render the screen for a route the guard has already let through.
///
/// `wizard` is the session's running onboarding, if any.
pub fn render(route: Route, state: SessionState, wizard: Option<&Wizard>) -> ScreenView {
    let role = state.role;
    match route {
        Route::RoleSelection => ScreenView::RoleSelection(role_selection::view()),
        Route::Onboarding(role) => match wizard.cloned().or_else(|| Wizard::new(role)) {
            Some(wizard) => ScreenView::Onboarding(Box::new(wizard.view())),
            None => ScreenView::RoleSelection(role_selection::view()),
        },
        Route::Dashboard => ScreenView::Dashboard(dashboard::view(role)),
        Route::Messages => ScreenView::Messages(messages::view(role)),
        Route::Documents => ScreenView::Documents(documents::view(role)),
        Route::Matches => ScreenView::Matches(matches::view(role)),
        Route::Settings => ScreenView::Settings(settings::view(role)),
    }
}
