//! Route guard: decides whether a navigation renders or redirects.
//!
//! The guard is stateless: every decision is a pure function of the
//! session snapshot and the requested route.

use serde::{Serialize, Serializer};

use crate::session::{Role, SessionState};

/// A screen in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    RoleSelection,
    Onboarding(Role),
    Dashboard,
    Messages,
    Documents,
    Matches,
    Settings,
}

/// How a route is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected { require_onboarding: bool },
}

impl Route {
    /// Parse a path such as `/dashboard` or `/onboarding/seller`.
    ///
    /// Trailing slashes are ignored. Returns `None` for unknown paths.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::RoleSelection),
            "/dashboard" => Some(Self::Dashboard),
            "/messages" => Some(Self::Messages),
            "/documents" => Some(Self::Documents),
            "/matches" => Some(Self::Matches),
            "/settings" => Some(Self::Settings),
            _ => trimmed
                .strip_prefix("/onboarding/")
                .and_then(Role::from_slug)
                .map(Self::Onboarding),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::RoleSelection => "/".to_string(),
            Self::Onboarding(role) => format!("/onboarding/{role}"),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Messages => "/messages".to_string(),
            Self::Documents => "/documents".to_string(),
            Self::Matches => "/matches".to_string(),
            Self::Settings => "/settings".to_string(),
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Self::RoleSelection => Access::Public,
            Self::Onboarding(_) => Access::Protected {
                require_onboarding: false,
            },
            Self::Dashboard | Self::Messages | Self::Documents | Self::Matches | Self::Settings => {
                Access::Protected {
                    require_onboarding: true,
                }
            }
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    Render,
    Redirect { to: Route },
}

/// The protected-route decision table.
///
/// 1. No role: go to role selection.
/// 2. Onboarding required but not done: go to the role's onboarding.
/// 3. Otherwise render.
pub fn check(state: SessionState, require_onboarding: bool) -> GuardDecision {
    if !state.role.is_set() {
        return GuardDecision::Redirect {
            to: Route::RoleSelection,
        };
    }
    if require_onboarding && !state.is_onboarded {
        return GuardDecision::Redirect {
            to: Route::Onboarding(state.role),
        };
    }
    GuardDecision::Render
}

/// Evaluate a navigation to `route`. Public routes always render;
/// protected ones go through [`check`].
pub fn evaluate(state: SessionState, route: Route) -> GuardDecision {
    match route.access() {
        Access::Public => GuardDecision::Render,
        Access::Protected { require_onboarding } => check(state, require_onboarding),
    }
}

/// Follow redirects until a route renders.
///
/// Every redirect target renders on its own, so this settles after at
/// most one hop; the bound guards against future table edits.
pub fn resolve(state: SessionState, requested: Route) -> (GuardDecision, Route) {
    let first = evaluate(state, requested);
    let mut landed = requested;
    let mut decision = first;
    for _ in 0..4 {
        match decision {
            GuardDecision::Render => break,
            GuardDecision::Redirect { to } => {
                landed = to;
                decision = evaluate(state, to);
            }
        }
    }
    (first, landed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [Role; 3] = [Role::Unset, Role::Buyer, Role::Seller];

    fn state(role: Role, is_onboarded: bool) -> SessionState {
        SessionState { role, is_onboarded }
    }

    #[test]
    fn decision_table() {
        for role in ROLES {
            for onboarded in [false, true] {
                for require in [false, true] {
                    let expected = if role == Role::Unset {
                        GuardDecision::Redirect {
                            to: Route::RoleSelection,
                        }
                    } else if require && !onboarded {
                        GuardDecision::Redirect {
                            to: Route::Onboarding(role),
                        }
                    } else {
                        GuardDecision::Render
                    };
                    let s = state(role, onboarded);
                    assert_eq!(check(s, require), expected, "{role} {onboarded} {require}");
                    // Deterministic.
                    assert_eq!(check(s, require), check(s, require));
                }
            }
        }
    }

    #[test]
    fn buyer_without_onboarding_goes_to_buyer_onboarding() {
        let decision = evaluate(state(Role::Buyer, false), Route::Dashboard);
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: Route::Onboarding(Role::Buyer)
            }
        );
    }

    #[test]
    fn role_selection_is_public() {
        for role in ROLES {
            for onboarded in [false, true] {
                assert_eq!(
                    evaluate(state(role, onboarded), Route::RoleSelection),
                    GuardDecision::Render
                );
            }
        }
    }

    #[test]
    fn onboarding_route_rules() {
        let unset = state(Role::Unset, false);
        assert_eq!(
            evaluate(unset, Route::Onboarding(Role::Seller)),
            GuardDecision::Redirect {
                to: Route::RoleSelection
            }
        );

        // Any set role may open either onboarding route; only the role
        // itself is checked.
        let buyer = state(Role::Buyer, false);
        assert_eq!(evaluate(buyer, Route::Onboarding(Role::Buyer)), GuardDecision::Render);
        assert_eq!(evaluate(buyer, Route::Onboarding(Role::Seller)), GuardDecision::Render);

        // Already onboarded users may revisit their onboarding.
        let done = state(Role::Seller, true);
        assert_eq!(evaluate(done, Route::Onboarding(Role::Seller)), GuardDecision::Render);
    }

    #[test]
    fn resolve_lands_on_renderable_route() {
        let (decision, landed) = resolve(state(Role::Seller, false), Route::Settings);
        assert_eq!(
            decision,
            GuardDecision::Redirect {
                to: Route::Onboarding(Role::Seller)
            }
        );
        assert_eq!(landed, Route::Onboarding(Role::Seller));

        let (decision, landed) = resolve(state(Role::Seller, true), Route::Settings);
        assert_eq!(decision, GuardDecision::Render);
        assert_eq!(landed, Route::Settings);
    }

    #[test]
    fn parse_paths() {
        assert_eq!(Route::parse("/"), Some(Route::RoleSelection));
        assert_eq!(Route::parse(""), Some(Route::RoleSelection));
        assert_eq!(Route::parse("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::parse("/matches/"), Some(Route::Matches));
        assert_eq!(
            Route::parse("/onboarding/seller"),
            Some(Route::Onboarding(Role::Seller))
        );
        assert_eq!(Route::parse("/onboarding/unset"), None);
        assert_eq!(Route::parse("/onboarding"), None);
        assert_eq!(Route::parse("/admin"), None);
    }

    #[test]
    fn path_round_trips() {
        let routes = [
            Route::RoleSelection,
            Route::Onboarding(Role::Buyer),
            Route::Onboarding(Role::Seller),
            Route::Dashboard,
            Route::Messages,
            Route::Documents,
            Route::Matches,
            Route::Settings,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn decision_json() {
        let json = serde_json::to_value(GuardDecision::Redirect {
            to: Route::Onboarding(Role::Buyer),
        })
        .unwrap();
        assert_eq!(json["decision"], "redirect");
        assert_eq!(json["to"], "/onboarding/buyer");

        let json = serde_json::to_value(GuardDecision::Render).unwrap();
        assert_eq!(json["decision"], "render");
    }
}
