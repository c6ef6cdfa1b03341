//! Onboarding wizard step engine.
//!
//! A wizard walks linearly through `TOTAL_STEPS` steps. `next` and
//! `previous` move by one and are clamped at both ends; `complete` is only
//! enabled on the last step. None of these validate the form: any field may
//! be left blank.

use serde::Serialize;

use super::form::{OnboardingForm, SummaryLine};
use super::options::{self, FieldOptions};
use crate::error::WizardError;
use crate::guard::Route;
use crate::session::Role;

/// Number of steps in both the buyer and seller flows.
pub const TOTAL_STEPS: u8 = 3;

/// Heading text for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
}

fn step_copy(role: Role, step: u8) -> StepCopy {
    let (title, subtitle) = match (role, step) {
        (Role::Buyer, 1) => (
            "Tell us about your company",
            "Help us understand your business to provide better matches",
        ),
        (Role::Buyer, 2) => (
            "What are you looking to buy?",
            "Select your interests and budget range",
        ),
        (Role::Buyer, _) => ("Almost done!", "Tell us more about your specific needs"),
        (Role::Seller, 1) => (
            "Tell us about your business",
            "Help buyers discover and trust your services",
        ),
        (Role::Seller, 2) => (
            "What services do you offer?",
            "Select all services that apply to your business",
        ),
        (Role::Seller, _) => (
            "Create your business profile",
            "Tell potential buyers about your expertise and approach",
        ),
        (Role::Unset, _) => ("", ""),
    };
    StepCopy { title, subtitle }
}

/// Progress marker state for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMarker {
    Done,
    Current,
    Upcoming,
}

/// Signal produced by the terminal transition.
///
/// The form data is not carried along; finishing only flips the session's
/// onboarded flag and moves the user on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub role: Role,
    pub navigate_to: Route,
}

/// In-progress onboarding for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    form: OnboardingForm,
    current_step: u8,
}

impl Wizard {
    /// Start a fresh wizard at step 1 with an empty form.
    pub fn new(role: Role) -> Option<Self> {
        Some(Self {
            form: OnboardingForm::empty(role)?,
            current_step: 1,
        })
    }

    pub fn role(&self) -> Role {
        self.form.role()
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == TOTAL_STEPS
    }

    /// Advance one step. A no-op on the last step. Returns the current step.
    pub fn next(&mut self) -> u8 {
        if self.current_step < TOTAL_STEPS {
            self.current_step += 1;
        }
        self.current_step
    }

    /// Go back one step. A no-op on the first step. Returns the current step.
    pub fn previous(&mut self) -> u8 {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
        self.current_step
    }

    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), WizardError> {
        self.form.set_field(name, value)
    }

    pub fn toggle(&mut self, name: &str, value: &str, checked: bool) -> Result<(), WizardError> {
        self.form.toggle(name, value, checked)
    }

    /// The terminal transition. `None` unless on the last step.
    pub fn complete(&self) -> Option<Completion> {
        self.is_last_step().then(|| Completion {
            role: self.role(),
            navigate_to: Route::Dashboard,
        })
    }

    pub fn progress(&self) -> Vec<StepMarker> {
        (1..=TOTAL_STEPS)
            .map(|step| match step.cmp(&self.current_step) {
                std::cmp::Ordering::Less => StepMarker::Done,
                std::cmp::Ordering::Equal => StepMarker::Current,
                std::cmp::Ordering::Greater => StepMarker::Upcoming,
            })
            .collect()
    }

    /// Everything a client needs to draw the current step.
    pub fn view(&self) -> WizardView {
        let role = self.role();
        WizardView {
            role,
            current_step: self.current_step,
            total_steps: TOTAL_STEPS,
            copy: step_copy(role, self.current_step),
            progress: self.progress(),
            can_go_back: !self.is_first_step(),
            can_advance: !self.is_last_step(),
            can_complete: self.is_last_step(),
            form: self.form.clone(),
            options: options::for_role(role),
            summary: self.is_last_step().then(|| self.form.summary()),
        }
    }
}

/// Serializable snapshot of a wizard.
#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub role: Role,
    pub current_step: u8,
    pub total_steps: u8,
    #[serde(flatten)]
    pub copy: StepCopy,
    pub progress: Vec<StepMarker>,
    pub can_go_back: bool,
    pub can_advance: bool,
    pub can_complete: bool,
    pub form: OnboardingForm,
    pub options: Vec<FieldOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Vec<SummaryLine>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_step_one() {
        let wizard = Wizard::new(Role::Buyer).unwrap();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.total_steps(), 3);
        assert!(wizard.is_first_step());
        assert!(Wizard::new(Role::Unset).is_none());
    }

    #[test]
    fn step_index_is_clamped() {
        let mut wizard = Wizard::new(Role::Seller).unwrap();
        assert_eq!(wizard.previous(), 1);
        assert_eq!(wizard.next(), 2);
        assert_eq!(wizard.next(), 3);
        assert_eq!(wizard.next(), 3);
        assert_eq!(wizard.next(), 3);
        assert_eq!(wizard.previous(), 2);
        assert_eq!(wizard.previous(), 1);
        assert_eq!(wizard.previous(), 1);
    }

    #[test]
    fn complete_only_on_last_step() {
        let mut wizard = Wizard::new(Role::Buyer).unwrap();
        assert!(wizard.complete().is_none());
        wizard.next();
        assert!(wizard.complete().is_none());
        wizard.next();

        let done = wizard.complete().unwrap();
        assert_eq!(done.role, Role::Buyer);
        assert_eq!(done.navigate_to, Route::Dashboard);
    }

    #[test]
    fn advancing_needs_no_fields() {
        let mut wizard = Wizard::new(Role::Seller).unwrap();
        wizard.next();
        wizard.next();
        assert!(wizard.complete().is_some());
    }

    #[test]
    fn navigation_keeps_form_data() {
        let mut wizard = Wizard::new(Role::Buyer).unwrap();
        wizard.set_field("company_name", "Acme".into()).unwrap();
        wizard.next();
        wizard.toggle("interests", "Office Supplies", true).unwrap();
        wizard.previous();
        wizard.next();
        wizard.next();

        let view = wizard.view();
        let summary = view.summary.unwrap();
        assert_eq!(summary[0].value, "Acme");
        assert_eq!(summary[4].value, "Office Supplies");
    }

    #[test]
    fn progress_markers_follow_current_step() {
        let mut wizard = Wizard::new(Role::Buyer).unwrap();
        assert_eq!(
            wizard.progress(),
            [StepMarker::Current, StepMarker::Upcoming, StepMarker::Upcoming]
        );
        wizard.next();
        wizard.next();
        assert_eq!(
            wizard.progress(),
            [StepMarker::Done, StepMarker::Done, StepMarker::Current]
        );
    }

    #[test]
    fn view_buttons_and_summary() {
        let mut wizard = Wizard::new(Role::Seller).unwrap();
        let first = wizard.view();
        assert!(!first.can_go_back);
        assert!(first.can_advance);
        assert!(!first.can_complete);
        assert!(first.summary.is_none());
        assert_eq!(first.copy.title, "Tell us about your business");

        wizard.next();
        wizard.next();
        let last = wizard.view();
        assert!(last.can_go_back);
        assert!(!last.can_advance);
        assert!(last.can_complete);
        assert!(last.summary.is_some());
        assert_eq!(last.copy.title, "Create your business profile");
    }

    #[test]
    fn view_json_shape() {
        let view = Wizard::new(Role::Buyer).unwrap().view();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["role"], "buyer");
        assert_eq!(json["current_step"], 1);
        assert_eq!(json["title"], "Tell us about your company");
        assert_eq!(json["form"]["role"], "buyer");
        assert_eq!(json["progress"][0], "current");
        assert!(json.get("summary").is_none());
    }
}
