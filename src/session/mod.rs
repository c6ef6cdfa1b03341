//! Session role state.
//!
//! Each session stands in for one browser tab: it holds the chosen role and
//! whether onboarding has been completed for it. State only changes through
//! [`SessionCommand`]s applied by the [`SessionStore`], which the
//! composition root owns and hands to the router.

pub mod extract;
pub mod routes;
pub mod state;
pub mod store;

pub use extract::{SESSION_HEADER, SessionId};
pub use routes::session_routes;
pub use state::{Role, SessionCommand, SessionState};
pub use store::{NavigationOutcome, SessionEvent, SessionInfo, SessionStore, spawn_prune_task};
