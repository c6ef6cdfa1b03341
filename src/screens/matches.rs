//! Matches: buyers browse sellers, sellers browse buyers.
//!
//! Listings are a tagged union so each side's fields are only reachable
//! through an exhaustive match. The search box on this screen is
//! decorative; nothing is filtered.

use serde::Serialize;

use crate::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// A match card, either a seller offering services or a buyer with a project.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Listing {
    Seller {
        id: u32,
        name: &'static str,
        category: &'static str,
        rating: f32,
        reviews: u32,
        location: &'static str,
        response_time: &'static str,
        price: &'static str,
        skills: &'static [&'static str],
        description: &'static str,
        completed_projects: u32,
        avatar: &'static str,
    },
    Buyer {
        id: u32,
        name: &'static str,
        category: &'static str,
        budget: &'static str,
        location: &'static str,
        urgency: Urgency,
        project_type: &'static str,
        description: &'static str,
        requirements: &'static [&'static str],
        timeline: &'static str,
        avatar: &'static str,
    },
}

/// The role-neutral parts of a listing card.
#[derive(Debug, Clone, Serialize)]
pub struct ListingCard {
    pub name: &'static str,
    pub avatar: &'static str,
    pub location: &'static str,
    pub badge: String,
    pub detail: String,
    pub tags: &'static [&'static str],
    pub price_line: &'static str,
    pub price_caption: &'static str,
    pub primary_action: &'static str,
}

impl Listing {
    pub fn card(&self) -> ListingCard {
        match *self {
            Listing::Seller {
                name,
                category,
                rating,
                reviews,
                location,
                response_time,
                price,
                skills,
                completed_projects,
                avatar,
                ..
            } => ListingCard {
                name,
                avatar,
                location,
                badge: format!("{rating} ({reviews} reviews)"),
                detail: format!("{response_time} response, {completed_projects} projects"),
                tags: skills,
                price_line: price,
                price_caption: category,
                primary_action: "Contact Seller",
            },
            Listing::Buyer {
                name,
                budget,
                location,
                urgency,
                project_type,
                requirements,
                timeline,
                avatar,
                ..
            } => ListingCard {
                name,
                avatar,
                location,
                badge: format!("{urgency} Priority"),
                detail: timeline.to_string(),
                tags: requirements,
                price_line: budget,
                price_caption: project_type,
                primary_action: "Submit Proposal",
            },
        }
    }
}

static SELLERS: [Listing; 3] = [
    Listing::Seller {
        id: 1,
        name: "TechSolutions Pro",
        category: "Web Development",
        rating: 4.9,
        reviews: 127,
        location: "San Francisco, CA",
        response_time: "< 1 hour",
        price: "$75/hour",
        skills: &["React", "Node.js", "TypeScript", "AWS"],
        description: "Full-stack developer with 8+ years of experience building scalable web applications.",
        completed_projects: 89,
        avatar: "TS",
    },
    Listing::Seller {
        id: 2,
        name: "Creative Design Studio",
        category: "UI/UX Design",
        rating: 4.8,
        reviews: 93,
        location: "New York, NY",
        response_time: "< 2 hours",
        price: "$85/hour",
        skills: &["Figma", "Adobe Creative Suite", "Prototyping", "User Research"],
        description: "Award-winning design studio specializing in modern, user-centered digital experiences.",
        completed_projects: 156,
        avatar: "CD",
    },
    Listing::Seller {
        id: 3,
        name: "Marketing Experts",
        category: "Digital Marketing",
        rating: 4.7,
        reviews: 204,
        location: "Austin, TX",
        response_time: "< 3 hours",
        price: "$65/hour",
        skills: &["SEO", "PPC", "Content Marketing", "Analytics"],
        description: "Growth-focused marketing agency helping businesses scale through data-driven strategies.",
        completed_projects: 178,
        avatar: "ME",
    },
];

static BUYERS: [Listing; 3] = [
    Listing::Buyer {
        id: 1,
        name: "GlobalCorp Inc",
        category: "Enterprise Software",
        budget: "$50K - $100K",
        location: "Seattle, WA",
        urgency: Urgency::High,
        project_type: "Custom CRM System",
        description: "Fortune 500 company looking for a comprehensive CRM solution with advanced analytics.",
        requirements: &["React/Angular", "Cloud Infrastructure", "API Integration", "Security Compliance"],
        timeline: "3-4 months",
        avatar: "GC",
    },
    Listing::Buyer {
        id: 2,
        name: "StartupX",
        category: "Mobile App",
        budget: "$20K - $40K",
        location: "Los Angeles, CA",
        urgency: Urgency::Medium,
        project_type: "Social Media App",
        description: "Fast-growing startup needs a cross-platform mobile app for their social platform.",
        requirements: &["React Native", "Real-time Features", "Push Notifications", "Social Integration"],
        timeline: "2-3 months",
        avatar: "SX",
    },
    Listing::Buyer {
        id: 3,
        name: "HealthTech Solutions",
        category: "Healthcare Software",
        budget: "$30K - $60K",
        location: "Boston, MA",
        urgency: Urgency::High,
        project_type: "Patient Management System",
        description: "Healthcare provider seeking HIPAA-compliant patient management and scheduling system.",
        requirements: &["HIPAA Compliance", "Database Design", "Appointment Scheduling", "Reporting"],
        timeline: "4-5 months",
        avatar: "HT",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct MatchEntry {
    pub listing: Listing,
    pub card: ListingCard,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchesView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    pub results: Vec<MatchEntry>,
}

pub fn view(role: Role) -> MatchesView {
    let (title, subtitle, search_placeholder, listings) = match role.counterpart() {
        Role::Seller => (
            "Find Sellers",
            "Discover talented professionals for your projects",
            "Search sellers...",
            &SELLERS,
        ),
        Role::Buyer | Role::Unset => (
            "Find Buyers",
            "Connect with potential clients for your services",
            "Search buyers...",
            &BUYERS,
        ),
    };
    MatchesView {
        title,
        subtitle,
        search_placeholder,
        results: listings
            .iter()
            .map(|listing| MatchEntry {
                card: listing.card(),
                listing: listing.clone(),
            })
            .collect(),
    }
}
