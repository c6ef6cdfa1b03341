//! Choice lists shown by the onboarding selects and checkbox grids.
//!
//! These are display catalogs only. Submitted values are not checked
//! against them.

use serde::Serialize;

use crate::session::Role;

pub const BUYER_INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Manufacturing",
    "Retail",
    "Education",
    "Real Estate",
    "Food & Beverage",
    "Other",
];

pub const COMPANY_SIZES: &[&str] = &[
    "1-10 employees",
    "11-50 employees",
    "51-200 employees",
    "201-1000 employees",
    "1000+ employees",
];

pub const BUDGETS: &[&str] = &[
    "Under $10K",
    "$10K - $50K",
    "$50K - $100K",
    "$100K - $500K",
    "$500K+",
];

pub const INTERESTS: &[&str] = &[
    "Software & Technology",
    "Marketing & Advertising",
    "Consulting Services",
    "Manufacturing & Equipment",
    "Office Supplies",
    "Professional Services",
    "Training & Development",
    "Logistics & Transportation",
];

pub const BUSINESS_TYPES: &[&str] = &[
    "Individual/Freelancer",
    "Small Business",
    "Corporation",
    "Partnership",
    "Non-Profit",
    "Other",
];

pub const SELLER_INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Manufacturing",
    "Retail",
    "Education",
    "Real Estate",
    "Food & Beverage",
    "Consulting",
    "Other",
];

pub const EXPERIENCE_LEVELS: &[&str] = &[
    "Less than 1 year",
    "1-3 years",
    "3-5 years",
    "5-10 years",
    "10+ years",
];

pub const SERVICES: &[&str] = &[
    "Software Development",
    "Web Design",
    "Digital Marketing",
    "Consulting",
    "Content Creation",
    "Data Analysis",
    "Project Management",
    "Training",
    "Manufacturing",
    "Logistics",
    "Customer Support",
    "Sales",
];

/// Choices keyed by the form field they populate.
#[derive(Debug, Clone, Serialize)]
pub struct FieldOptions {
    pub field: &'static str,
    pub choices: &'static [&'static str],
}

/// All option catalogs used by a role's wizard.
pub fn for_role(role: Role) -> Vec<FieldOptions> {
    let pairs: &[(&'static str, &'static [&'static str])] = match role {
        Role::Buyer => &[
            ("industry", BUYER_INDUSTRIES),
            ("company_size", COMPANY_SIZES),
            ("budget", BUDGETS),
            ("interests", INTERESTS),
        ],
        Role::Seller => &[
            ("business_type", BUSINESS_TYPES),
            ("industry", SELLER_INDUSTRIES),
            ("experience", EXPERIENCE_LEVELS),
            ("services", SERVICES),
        ],
        Role::Unset => &[],
    };
    pairs
        .iter()
        .map(|&(field, choices)| FieldOptions { field, choices })
        .collect()
}
