//! Shared store of live consultations.
//!
//! The outer `RwLock` guards only the id → session map. Each session has
//! its own `Mutex`, so turns for different patients never contend and
//! overlapping turns for the same patient merge one at a time. Closing a
//! session empties its slot under that mutex; a turn that already holds
//! the slot but locks it afterwards sees `None` and fails instead of
//! merging into a context nobody will read.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use uuid::Uuid;

use super::error::SessionError;
use super::merge::merge_with_context;
use super::types::SessionContext;
use crate::models::{Entity, TurnRole};
use crate::nlp::{extract_entities, resolve_language};

/// `None` once the session has been closed.
type SharedSession = Arc<Mutex<Option<SessionContext>>>;

#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, SharedSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty consultation and return its id.
    pub fn open_session(&self) -> Result<Uuid, SessionError> {
        self.insert(SessionContext::new())
    }

    /// Register an existing context (e.g. one restored from JSON) under its
    /// own `session_id`, replacing any session with the same id.
    pub fn insert(&self, ctx: SessionContext) -> Result<Uuid, SessionError> {
        let id = ctx.session_id;
        let mut sessions = self.sessions.write().map_err(|_| SessionError::LockPoisoned)?;
        sessions.insert(id, Arc::new(Mutex::new(Some(ctx))));
        tracing::info!(session_id = %id, "Session opened");
        Ok(id)
    }

    /// Remove a session and return its final state.
    pub fn close_session(&self, id: Uuid) -> Result<SessionContext, SessionError> {
        let session = {
            let mut sessions = self.sessions.write().map_err(|_| SessionError::LockPoisoned)?;
            sessions.remove(&id).ok_or(SessionError::SessionNotFound(id))?
        };
        let ctx = session
            .lock()
            .map_err(|_| SessionError::LockPoisoned)?
            .take()
            .ok_or(SessionError::SessionNotFound(id))?;
        tracing::info!(
            session_id = %id,
            symptoms = ctx.symptom_count(),
            turns = ctx.timeline().len(),
            "Session closed"
        );
        Ok(ctx)
    }

    /// Owned copy of a session's current state.
    pub fn snapshot(&self, id: Uuid) -> Result<SessionContext, SessionError> {
        self.with_session(id, |ctx| ctx.clone())
    }

    /// Run `f` with exclusive access to one session.
    pub fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionContext) -> R,
    ) -> Result<R, SessionError> {
        let session = self.session(id)?;
        let mut slot = session.lock().map_err(|_| SessionError::LockPoisoned)?;
        let ctx = slot.as_mut().ok_or(SessionError::SessionNotFound(id))?;
        Ok(f(ctx))
    }

    /// Extract entities from one user utterance and fold them into the
    /// session. Extraction runs before the session lock is taken.
    pub fn process_turn(
        &self,
        id: Uuid,
        text: &str,
        language_hint: Option<&str>,
    ) -> Result<Vec<Entity>, SessionError> {
        let session = self.session(id)?;
        let entities = extract_entities(text, language_hint);
        let language = resolve_language(language_hint, text);

        let mut slot = session.lock().map_err(|_| SessionError::LockPoisoned)?;
        let ctx = slot.as_mut().ok_or(SessionError::SessionNotFound(id))?;
        ctx.language = Some(language);
        ctx.record_turn(TurnRole::User, text);
        merge_with_context(&entities, ctx);

        tracing::debug!(
            session_id = %id,
            entities = entities.len(),
            symptoms = ctx.symptom_count(),
            "Turn merged"
        );
        Ok(entities)
    }

    pub fn len(&self) -> Result<usize, SessionError> {
        let sessions = self.sessions.read().map_err(|_| SessionError::LockPoisoned)?;
        Ok(sessions.len())
    }

    pub fn is_empty(&self) -> Result<bool, SessionError> {
        Ok(self.len()? == 0)
    }

    fn session(&self, id: Uuid) -> Result<SharedSession, SessionError> {
        let sessions = self.sessions.read().map_err(|_| SessionError::LockPoisoned)?;
        sessions
            .get(&id)
            .cloned()
            .ok_or(SessionError::SessionNotFound(id))
    }
}
