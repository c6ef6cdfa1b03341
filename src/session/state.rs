//! Session role state: the role a user has picked and whether they have
//! finished onboarding for it.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// The marketplace persona for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Unset,
    Buyer,
    Seller,
}

impl Role {
    /// Parse the role segment of an `/onboarding/{role}` path.
    ///
    /// Only `buyer` and `seller` are valid route segments.
    pub fn from_slug(slug: &str) -> Option<Role> {
        match slug {
            "buyer" => Some(Self::Buyer),
            "seller" => Some(Self::Seller),
            _ => None,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// The role on the other side of the marketplace.
    pub fn counterpart(&self) -> Role {
        match self {
            Self::Buyer => Self::Seller,
            Self::Seller => Self::Buyer,
            Self::Unset => Self::Unset,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unset => "unset",
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        };
        write!(f, "{s}")
    }
}

/// Commands that mutate a session. These are the only mutation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SessionCommand {
    SetRole { role: Role },
    SetOnboarded { onboarded: bool },
    Logout,
}

/// Snapshot of a session's role and onboarding status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub role: Role,
    pub is_onboarded: bool,
}

impl SessionState {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_onboarded(&self) -> bool {
        self.is_onboarded
    }

    /// Apply a command and return the resulting snapshot.
    ///
    /// `SetRole` leaves the onboarded flag alone, so switching roles after
    /// onboarding keeps the flag. `SetOnboarded(true)` without a role is
    /// ignored: the flag may only become true once a role is chosen.
    pub fn apply(self, command: SessionCommand) -> SessionState {
        match command {
            SessionCommand::SetRole { role } => {
                if self.is_onboarded && self.role.is_set() && role != self.role {
                    warn!(from = %self.role, to = %role, "Role switched while onboarded; onboarded flag kept");
                }
                SessionState { role, ..self }
            }
            SessionCommand::SetOnboarded { onboarded } => {
                if onboarded && !self.role.is_set() {
                    warn!("Ignoring SetOnboarded(true) with no role selected");
                    return self;
                }
                SessionState {
                    is_onboarded: onboarded,
                    ..self
                }
            }
            SessionCommand::Logout => SessionState::default(),
        }
    }
}
