//! Simulated platform session: what the platform keeps between turns.

use chrono::{DateTime, Utc};
use prompts_core::SessionState;
use uuid::Uuid;

pub const START_SCENE: &str = "actions.scene.START_CONVERSATION";
pub const PROMPTS_SCENE: &str = "Prompts";
pub const END_SCENE: &str = "actions.scene.END_CONVERSATION";

#[derive(Debug, Clone)]
pub struct SimulatorSession {
    pub id: Uuid,
    /// State echoed to and from the webhook on every turn.
    pub state: SessionState,
    pub scene: String,
    pub turn_count: usize,
    pub ended: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SimulatorSession {
    #[must_use]
    pub fn new() -> Self {
        let id = Uuid::now_v7();
        let now = Utc::now();
        Self {
            id,
            state: SessionState::new(id.to_string()),
            scene: START_SCENE.to_string(),
            turn_count: 0,
            ended: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.scene != START_SCENE
    }

    pub fn enter_scene(&mut self, scene: &str) {
        scene.clone_into(&mut self.scene);
        self.updated_at = Utc::now();
    }

    pub fn end(&mut self) {
        self.ended = true;
        self.enter_scene(END_SCENE);
    }

    /// Count a turn and return its number.
    pub fn next_turn(&mut self) -> usize {
        self.turn_count += 1;
        self.updated_at = Utc::now();
        self.turn_count
    }
}

impl Default for SimulatorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = SimulatorSession::new();
        assert!(!session.started());
        assert!(!session.ended);
        assert_eq!(session.state.id, session.id.to_string());
    }

    #[test]
    fn test_lifecycle() {
        let mut session = SimulatorSession::new();
        session.enter_scene(PROMPTS_SCENE);
        assert!(session.started());
        assert_eq!(session.next_turn(), 1);
        assert_eq!(session.next_turn(), 2);

        session.end();
        assert!(session.ended);
        assert_eq!(session.scene, END_SCENE);
    }
}
