//! Session store: in-memory sessions with broadcast of state changes.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{RwLock, broadcast};
use tracing::{debug, info};
use uuid::Uuid;

use super::state::{Role, SessionCommand, SessionState};
use crate::error::{SessionError, WizardError};
use crate::guard::{self, GuardDecision, Route};
use crate::onboarding::{Completion, Wizard};

/// Default broadcast channel capacity.
const DEFAULT_BROADCAST_CAPACITY: usize = 256;

/// Change notifications fanned out to session subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    SessionUpdate { session_id: Uuid, state: SessionState },
    SessionClosed { session_id: Uuid },
}

impl SessionEvent {
    pub fn session_id(&self) -> Uuid {
        match self {
            Self::SessionUpdate { session_id, .. } | Self::SessionClosed { session_id } => {
                *session_id
            }
        }
    }
}

struct SessionEntry {
    state: SessionState,
    wizard: Option<Wizard>,
    created_at: DateTime<Utc>,
    last_seen: DateTime<Utc>,
}

impl SessionEntry {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            state: SessionState::default(),
            wizard: None,
            created_at: now,
            last_seen: now,
        }
    }

    fn touch(&mut self) {
        self.last_seen = Utc::now();
    }
}

/// Summary returned when a session is opened or inspected.
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
    pub onboarding_active: bool,
}

/// Result of a navigation attempt.
#[derive(Debug, Clone)]
pub struct NavigationOutcome {
    pub requested: Route,
    pub decision: GuardDecision,
    pub landed: Route,
    pub state: SessionState,
    pub wizard: Option<Wizard>,
}

/// All live sessions.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionStore {
    pub fn new() -> Arc<Self> {
        let (tx, _rx) = broadcast::channel(DEFAULT_BROADCAST_CAPACITY);
        Arc::new(Self {
            sessions: RwLock::new(HashMap::new()),
            tx,
        })
    }

    /// Subscribe to session change events. Each WS client calls this.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    /// Open a new session with no role and no onboarding.
    pub async fn open(&self) -> SessionInfo {
        let session_id = Uuid::new_v4();
        let entry = SessionEntry::new();
        let info = SessionInfo {
            session_id,
            state: entry.state,
            created_at: entry.created_at,
            onboarding_active: false,
        };
        self.sessions.write().await.insert(session_id, entry);
        info!(session_id = %session_id, "Session opened");
        info
    }

    /// Close a session. Returns false if it did not exist.
    pub async fn close(&self, session_id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&session_id).is_some();
        if removed {
            info!(session_id = %session_id, "Session closed");
            let _ = self.tx.send(SessionEvent::SessionClosed { session_id });
        }
        removed
    }

    pub async fn info(&self, session_id: Uuid) -> Result<SessionInfo, SessionError> {
        let mut sessions = self.sessions.write().await;
        let entry = lookup(&mut sessions, session_id)?;
        entry.touch();
        Ok(SessionInfo {
            session_id,
            state: entry.state,
            created_at: entry.created_at,
            onboarding_active: entry.wizard.is_some(),
        })
    }

    /// Read the current snapshot.
    pub async fn snapshot(&self, session_id: Uuid) -> Result<SessionState, SessionError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&session_id)
            .map(|entry| entry.state)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }

    /// Apply a command and broadcast the new snapshot.
    ///
    /// Logout, or choosing a role different from the one being onboarded,
    /// drops any in-progress wizard without writing it anywhere.
    pub async fn apply(
        &self,
        session_id: Uuid,
        command: SessionCommand,
    ) -> Result<SessionState, SessionError> {
        let mut sessions = self.sessions.write().await;
        let entry = lookup(&mut sessions, session_id)?;
        entry.touch();

        let before = entry.state;
        entry.state = before.apply(command);

        let drop_wizard = match command {
            SessionCommand::Logout => true,
            SessionCommand::SetRole { role } => {
                entry.wizard.as_ref().is_some_and(|w| w.role() != role)
            }
            SessionCommand::SetOnboarded { .. } => false,
        };
        if drop_wizard && entry.wizard.take().is_some() {
            debug!(session_id = %session_id, "In-progress onboarding discarded");
        }

        let after = entry.state;
        info!(
            session_id = %session_id,
            ?command,
            role = %after.role,
            onboarded = after.is_onboarded,
            "Session command applied"
        );
        let _ = self.tx.send(SessionEvent::SessionUpdate {
            session_id,
            state: after,
        });
        Ok(after)
    }

    /// Run the guard for `requested` and move the session there.
    ///
    /// Landing on an onboarding route starts a wizard (or keeps the one
    /// already running for that role). Landing anywhere else discards it.
    pub async fn navigate(
        &self,
        session_id: Uuid,
        requested: Route,
    ) -> Result<NavigationOutcome, SessionError> {
        let mut sessions = self.sessions.write().await;
        let entry = lookup(&mut sessions, session_id)?;
        entry.touch();

        let (decision, landed) = guard::resolve(entry.state, requested);
        match landed {
            Route::Onboarding(role) => {
                if entry.wizard.as_ref().map(Wizard::role) != Some(role) {
                    entry.wizard = Wizard::new(role);
                    debug!(session_id = %session_id, %role, "Onboarding wizard started");
                }
            }
            _ => {
                if entry.wizard.take().is_some() {
                    debug!(session_id = %session_id, "Left onboarding; wizard discarded");
                }
            }
        }

        if let GuardDecision::Redirect { to } = decision {
            info!(
                session_id = %session_id,
                requested = %requested,
                redirect = %to,
                "Navigation redirected"
            );
        }

        Ok(NavigationOutcome {
            requested,
            decision,
            landed,
            state: entry.state,
            wizard: entry.wizard.clone(),
        })
    }

    /// Run `f` against the session's wizard and return its result along
    /// with a copy of the wizard afterwards.
    pub async fn with_wizard<R>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut Wizard) -> Result<R, WizardError>,
    ) -> crate::Result<(R, Wizard)> {
        let mut sessions = self.sessions.write().await;
        let entry = lookup(&mut sessions, session_id)?;
        entry.touch();
        let wizard = entry.wizard.as_mut().ok_or(WizardError::NotActive)?;
        let out = f(wizard)?;
        Ok((out, wizard.clone()))
    }

    /// Fire the wizard's terminal transition.
    ///
    /// On the last step this marks the session onboarded, drops the wizard
    /// and returns the completion. Anywhere else it is a no-op and the
    /// unchanged wizard comes back instead.
    pub async fn complete_onboarding(
        &self,
        session_id: Uuid,
    ) -> crate::Result<Result<(Completion, SessionState), Wizard>> {
        let mut sessions = self.sessions.write().await;
        let entry = lookup(&mut sessions, session_id)?;
        entry.touch();
        let wizard = entry.wizard.as_ref().ok_or(WizardError::NotActive)?;

        let Some(completion) = wizard.complete() else {
            debug!(
                session_id = %session_id,
                step = wizard.current_step(),
                "Complete ignored before last step"
            );
            return Ok(Err(wizard.clone()));
        };

        entry.state = entry
            .state
            .apply(SessionCommand::SetOnboarded { onboarded: true });
        entry.wizard = None;
        let state = entry.state;
        info!(session_id = %session_id, role = %completion.role, "Onboarding completed");

        let _ = self.tx.send(SessionEvent::SessionUpdate { session_id, state });
        Ok(Ok((completion, state)))
    }

    /// Drop sessions idle for longer than `idle_timeout`. Returns how many.
    pub async fn prune_idle(&self, idle_timeout: Duration) -> usize {
        let Some(cutoff) = chrono::Duration::from_std(idle_timeout)
            .ok()
            .and_then(|d| Utc::now().checked_sub_signed(d))
        else {
            return 0;
        };
        let mut sessions = self.sessions.write().await;
        let stale: Vec<Uuid> = sessions
            .iter()
            .filter(|(_, e)| e.last_seen < cutoff)
            .map(|(id, _)| *id)
            .collect();
        for session_id in &stale {
            sessions.remove(session_id);
            let _ = self.tx.send(SessionEvent::SessionClosed {
                session_id: *session_id,
            });
        }
        if !stale.is_empty() {
            info!(count = stale.len(), "Pruned idle sessions");
        }
        stale.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// The role of a session's running wizard, if any.
    pub async fn wizard_role(&self, session_id: Uuid) -> Result<Option<Role>, SessionError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&session_id)
            .map(|e| e.wizard.as_ref().map(Wizard::role))
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }
}

fn lookup(
    sessions: &mut HashMap<Uuid, SessionEntry>,
    session_id: Uuid,
) -> Result<&mut SessionEntry, SessionError> {
    sessions
        .get_mut(&session_id)
        .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
}

/// Spawn a background task that periodically prunes idle sessions.
pub fn spawn_prune_task(
    store: Arc<SessionStore>,
    interval: Duration,
    idle_timeout: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(interval);
        loop {
            interval.tick().await;
            store.prune_idle(idle_timeout).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    async fn buyer_session(store: &SessionStore) -> Uuid {
        let id = store.open().await.session_id;
        store
            .apply(id, SessionCommand::SetRole { role: Role::Buyer })
            .await
            .unwrap();
        id
    }

    #[tokio::test]
    async fn open_starts_unset() {
        let store = SessionStore::new();
        assert!(store.is_empty().await);

        let info = store.open().await;
        assert_eq!(info.state, SessionState::default());
        assert!(!info.onboarding_active);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn unknown_session_fails_loudly() {
        let store = SessionStore::new();
        let err = store.snapshot(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, SessionError::NotFound(_)));
    }

    #[tokio::test]
    async fn set_role_then_dashboard_redirects_to_onboarding() {
        let store = SessionStore::new();
        let id = buyer_session(&store).await;

        let nav = store.navigate(id, Route::Dashboard).await.unwrap();
        assert_eq!(
            nav.decision,
            GuardDecision::Redirect {
                to: Route::Onboarding(Role::Buyer)
            }
        );
        assert_eq!(nav.landed, Route::Onboarding(Role::Buyer));
        assert_eq!(nav.wizard.unwrap().current_step(), 1);
    }

    #[tokio::test]
    async fn full_onboarding_unlocks_dashboard() {
        let store = SessionStore::new();
        let id = buyer_session(&store).await;
        store.navigate(id, Route::Onboarding(Role::Buyer)).await.unwrap();

        let (step, _) = store.with_wizard(id, |w| Ok(w.next())).await.unwrap();
        assert_eq!(step, 2);
        let (step, _) = store.with_wizard(id, |w| Ok(w.next())).await.unwrap();
        assert_eq!(step, 3);

        let (completion, state) = store.complete_onboarding(id).await.unwrap().unwrap();
        assert_eq!(completion.navigate_to, Route::Dashboard);
        assert!(state.is_onboarded);
        assert_eq!(store.wizard_role(id).await.unwrap(), None);

        let nav = store.navigate(id, Route::Dashboard).await.unwrap();
        assert_eq!(nav.decision, GuardDecision::Render);
        assert_eq!(nav.landed, Route::Dashboard);
    }

    #[tokio::test]
    async fn complete_before_last_step_is_noop() {
        let store = SessionStore::new();
        let id = buyer_session(&store).await;
        store.navigate(id, Route::Onboarding(Role::Buyer)).await.unwrap();

        let wizard = store.complete_onboarding(id).await.unwrap().unwrap_err();
        assert_eq!(wizard.current_step(), 1);
        assert!(!store.snapshot(id).await.unwrap().is_onboarded);
    }

    #[tokio::test]
    async fn logout_mid_wizard_discards_form() {
        let store = SessionStore::new();
        let id = buyer_session(&store).await;
        store.navigate(id, Route::Onboarding(Role::Buyer)).await.unwrap();
        store
            .with_wizard(id, |w| {
                w.set_field("company_name", "Acme".into())?;
                Ok(w.next())
            })
            .await
            .unwrap();

        let state = store.apply(id, SessionCommand::Logout).await.unwrap();
        assert_eq!(state, SessionState::default());
        assert_eq!(store.wizard_role(id).await.unwrap(), None);

        let nav = store.navigate(id, Route::Dashboard).await.unwrap();
        assert_eq!(nav.landed, Route::RoleSelection);

        let err = store.with_wizard(id, |w| Ok(w.current_step())).await.unwrap_err();
        assert!(matches!(err, Error::Wizard(WizardError::NotActive)));
    }

    #[tokio::test]
    async fn leaving_onboarding_discards_wizard() {
        let store = SessionStore::new();
        let id = buyer_session(&store).await;
        store.navigate(id, Route::Onboarding(Role::Buyer)).await.unwrap();
        store.with_wizard(id, |w| Ok(w.next())).await.unwrap();

        store.navigate(id, Route::RoleSelection).await.unwrap();
        assert_eq!(store.wizard_role(id).await.unwrap(), None);

        let nav = store.navigate(id, Route::Onboarding(Role::Buyer)).await.unwrap();
        assert_eq!(nav.wizard.unwrap().current_step(), 1);
    }

    #[tokio::test]
    async fn revisiting_onboarding_keeps_progress() {
        let store = SessionStore::new();
        let id = buyer_session(&store).await;
        store.navigate(id, Route::Onboarding(Role::Buyer)).await.unwrap();
        store.with_wizard(id, |w| Ok(w.next())).await.unwrap();

        let nav = store.navigate(id, Route::Onboarding(Role::Buyer)).await.unwrap();
        assert_eq!(nav.wizard.unwrap().current_step(), 2);
    }

    #[tokio::test]
    async fn other_role_onboarding_renders() {
        let store = SessionStore::new();
        let id = buyer_session(&store).await;

        let nav = store.navigate(id, Route::Onboarding(Role::Seller)).await.unwrap();
        assert_eq!(nav.decision, GuardDecision::Render);
        assert_eq!(nav.landed, Route::Onboarding(Role::Seller));
        assert_eq!(nav.wizard.unwrap().role(), Role::Seller);
    }

    #[tokio::test]
    async fn switching_role_drops_other_wizard() {
        let store = SessionStore::new();
        let id = buyer_session(&store).await;
        store.navigate(id, Route::Onboarding(Role::Buyer)).await.unwrap();

        store
            .apply(id, SessionCommand::SetRole { role: Role::Seller })
            .await
            .unwrap();
        assert_eq!(store.wizard_role(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn commands_are_broadcast() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();
        let id = store.open().await.session_id;

        store
            .apply(id, SessionCommand::SetRole { role: Role::Seller })
            .await
            .unwrap();
        match rx.recv().await.unwrap() {
            SessionEvent::SessionUpdate { session_id, state } => {
                assert_eq!(session_id, id);
                assert_eq!(state.role, Role::Seller);
            }
            other => panic!("unexpected event {other:?}"),
        }

        store.close(id).await;
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SessionEvent::SessionClosed { .. }));
        assert_eq!(event.session_id(), id);
    }

    #[tokio::test]
    async fn prune_removes_only_idle_sessions() {
        let store = SessionStore::new();
        store.open().await;
        store.open().await;

        assert_eq!(store.prune_idle(Duration::from_secs(60)).await, 0);
        assert_eq!(store.len().await, 2);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(store.prune_idle(Duration::from_millis(5)).await, 2);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn prune_with_huge_timeout_keeps_everything() {
        let store = SessionStore::new();
        store.open().await;

        let pruned = store
            .prune_idle(Duration::from_secs(9_000_000_000_000))
            .await;
        assert_eq!(pruned, 0);
        assert_eq!(store.prune_idle(Duration::MAX).await, 0);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn close_is_reported_once() {
        let store = SessionStore::new();
        let id = store.open().await.session_id;
        assert!(store.close(id).await);
        assert!(!store.close(id).await);
    }
}
