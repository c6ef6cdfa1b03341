//! Per-role onboarding form data.

use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::session::Role;

/// Fields collected from a buyer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerForm {
    pub company_name: String,
    pub industry: String,
    pub company_size: String,
    pub budget: String,
    pub interests: Vec<String>,
    pub description: String,
}

/// Fields collected from a seller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerForm {
    pub business_name: String,
    pub business_type: String,
    pub industry: String,
    pub experience: String,
    pub services: Vec<String>,
    pub portfolio: String,
    pub description: String,
    pub website: String,
}

/// The form behind a wizard, tagged by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum OnboardingForm {
    Buyer(BuyerForm),
    Seller(SellerForm),
}

/// One line of the profile summary shown on the last step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

const NOT_SPECIFIED: &str = "Not specified";
const NONE_SELECTED: &str = "None selected";

impl OnboardingForm {
    /// An empty form for `role`. There is no form for an unset role.
    pub fn empty(role: Role) -> Option<Self> {
        match role {
            Role::Buyer => Some(Self::Buyer(BuyerForm::default())),
            Role::Seller => Some(Self::Seller(SellerForm::default())),
            Role::Unset => None,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Buyer(_) => Role::Buyer,
            Self::Seller(_) => Role::Seller,
        }
    }

    /// Overwrite a scalar field.
    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), WizardError> {
        let slot = match self {
            Self::Buyer(form) => match name {
                "company_name" => &mut form.company_name,
                "industry" => &mut form.industry,
                "company_size" => &mut form.company_size,
                "budget" => &mut form.budget,
                "description" => &mut form.description,
                "interests" => return Err(WizardError::NotAScalarField(name.to_string())),
                _ => return Err(WizardError::UnknownField(name.to_string())),
            },
            Self::Seller(form) => match name {
                "business_name" => &mut form.business_name,
                "business_type" => &mut form.business_type,
                "industry" => &mut form.industry,
                "experience" => &mut form.experience,
                "portfolio" => &mut form.portfolio,
                "description" => &mut form.description,
                "website" => &mut form.website,
                "services" => return Err(WizardError::NotAScalarField(name.to_string())),
                _ => return Err(WizardError::UnknownField(name.to_string())),
            },
        };
        *slot = value;
        Ok(())
    }

    /// Check or uncheck `value` in a multi-select field.
    pub fn toggle(&mut self, name: &str, value: &str, checked: bool) -> Result<(), WizardError> {
        let list = self.list_field(name)?;
        if checked {
            if !list.iter().any(|v| v == value) {
                list.push(value.to_string());
            }
        } else {
            list.retain(|v| v != value);
        }
        Ok(())
    }

    fn list_field(&mut self, name: &str) -> Result<&mut Vec<String>, WizardError> {
        match self {
            Self::Buyer(form) => match name {
                "interests" => Ok(&mut form.interests),
                "company_name" | "industry" | "company_size" | "budget" | "description" => {
                    Err(WizardError::NotAListField(name.to_string()))
                }
                _ => Err(WizardError::UnknownField(name.to_string())),
            },
            Self::Seller(form) => match name {
                "services" => Ok(&mut form.services),
                "business_name" | "business_type" | "industry" | "experience" | "portfolio"
                | "description" | "website" => Err(WizardError::NotAListField(name.to_string())),
                _ => Err(WizardError::UnknownField(name.to_string())),
            },
        }
    }

    /// Profile summary with placeholders for anything left blank.
    pub fn summary(&self) -> Vec<SummaryLine> {
        match self {
            Self::Buyer(form) => vec![
                line("Company", &form.company_name),
                line("Industry", &form.industry),
                line("Size", &form.company_size),
                line("Budget", &form.budget),
                list_line("Interests", &form.interests),
            ],
            Self::Seller(form) => {
                let mut lines = vec![
                    line("Business", &form.business_name),
                    line("Type", &form.business_type),
                    line("Industry", &form.industry),
                    line("Experience", &form.experience),
                    list_line("Services", &form.services),
                ];
                if !form.website.is_empty() {
                    lines.push(line("Website", &form.website));
                }
                lines
            }
        }
    }
}

fn line(label: &'static str, value: &str) -> SummaryLine {
    let value = if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    };
    SummaryLine { label, value }
}

fn list_line(label: &'static str, values: &[String]) -> SummaryLine {
    let value = if values.is_empty() {
        NONE_SELECTED.to_string()
    } else {
        values.join(", ")
    };
    SummaryLine { label, value }
}
