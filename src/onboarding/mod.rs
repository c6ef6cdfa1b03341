//! Onboarding wizards: the three-step buyer and seller setup flows.
//!
//! A wizard is created when a session lands on `/onboarding/{role}` and is
//! thrown away when it navigates elsewhere or logs out. Finishing the last
//! step marks the session onboarded and sends the user to the dashboard.

pub mod form;
pub mod options;
pub mod routes;
pub mod wizard;

pub use form::{BuyerForm, OnboardingForm, SellerForm, SummaryLine};
pub use routes::onboarding_routes;
pub use wizard::{Completion, TOTAL_STEPS, Wizard, WizardView};
