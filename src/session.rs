//! Phase-tagged session handle.
//!
//! The low-level [`SessionClient`] operations take every identifier
//! explicitly and never check call ordering. This handle layers the
//! lifecycle `Uninitialized -> Active -> Closed` on top: operations invalid
//! for the current phase surface [`ClientError::Phase`] instead of racing a
//! request the backend would reject or misattribute.

use crate::client::{InitOutcome, SessionClient};
use crate::error::ClientError;
use crate::pieces::PieceKind;
use crate::transport::Transport;
use crate::types::{Marks, Scene, State};

/// Lifecycle phase of a session handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Active,
    Closed,
}

/// One backend session plus the local state needed to drive it.
///
/// The handle is the sole owner of its `game_id`, scene and marks; the
/// client caches nothing.
#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    game_id: String,
    scene: Scene,
    marks: Marks,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Uninitialized
    }
}

impl Session {
    /// A handle that has not yet created a backend session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    /// Replace a marker locally; pushed on the next [`Session::sync_marks`].
    pub fn set_mark(&mut self, kind: PieceKind, coord: [f64; 2]) {
        self.marks.set(kind, coord);
    }

    fn require(&self, expected: Phase) -> Result<(), ClientError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ClientError::Phase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Create the session on the backend. Uninitialized -> Active.
    pub async fn open<T: Transport>(
        &mut self,
        client: &SessionClient<T>,
        place: &str,
    ) -> Result<(), ClientError> {
        self.require(Phase::Uninitialized)?;
        let InitOutcome {
            game_id,
            scene,
            marks,
        } = client.init(place).await?;
        self.game_id = game_id;
        self.scene = scene;
        self.marks = marks;
        self.phase = Phase::Active;
        Ok(())
    }

    /// Restore the session's initial simulation state.
    pub async fn reset<T: Transport>(
        &self,
        client: &SessionClient<T>,
    ) -> Result<State, ClientError> {
        self.require(Phase::Active)?;
        client.reset(&self.game_id, &self.scene).await
    }

    /// Advance the simulation by one tick.
    pub async fn step<T: Transport>(
        &self,
        client: &SessionClient<T>,
    ) -> Result<State, ClientError> {
        self.require(Phase::Active)?;
        client.step(&self.game_id, &self.scene).await
    }

    /// Push the local marker set to the backend.
    pub async fn sync_marks<T: Transport>(
        &self,
        client: &SessionClient<T>,
    ) -> Result<(), ClientError> {
        self.require(Phase::Active)?;
        let size = self
            .scene
            .cfg
            .as_ref()
            .ok_or(ClientError::MissingSceneConfig)?
            .size;
        client.sync_marks(&self.game_id, &self.marks, size).await
    }

    /// Tear the session down. Active -> Closed.
    pub async fn close<T: Transport>(
        &mut self,
        client: &SessionClient<T>,
    ) -> Result<(), ClientError> {
        self.require(Phase::Active)?;
        client.close(&self.game_id).await?;
        self.phase = Phase::Closed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_handle_is_uninitialized() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Uninitialized);
        assert!(session.game_id().is_empty());
    }

    #[test]
    fn set_mark_updates_local_marks() {
        let mut session = Session::new();
        session.set_mark(PieceKind::Queen, [12.0, 34.0]);
        assert_eq!(session.marks().get(PieceKind::Queen), [12.0, 34.0]);
    }
}
