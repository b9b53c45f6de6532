//! Wire payloads for the backend HTTP surface.
//!
//! These mirror the backend's JSON exactly, coordinates still in simulation
//! space. The client converts them into the display-space types in
//! [`crate::types`] before anything reaches the caller.

use serde::Deserialize;

use crate::pieces::PieceKind;

/// Body of `GET /init/{place}`.
#[derive(Debug, Clone, Deserialize)]
pub struct InitPayload {
    pub game_id: String,
    pub terrain: serde_json::Value,
    pub place: String,
    pub size: f64,
    pub teams: u32,
    pub marks: RawMarks,
}

/// Per-kind marker coordinates in simulation space.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMarks {
    pub king: [f64; 2],
    pub queen: [f64; 2],
    pub rook: [f64; 2],
    pub bishop: [f64; 2],
    pub knight: [f64; 2],
    pub pawn: [f64; 2],
}

impl RawMarks {
    pub fn get(&self, kind: PieceKind) -> [f64; 2] {
        match kind {
            PieceKind::King => self.king,
            PieceKind::Queen => self.queen,
            PieceKind::Rook => self.rook,
            PieceKind::Bishop => self.bishop,
            PieceKind::Knight => self.knight,
            PieceKind::Pawn => self.pawn,
        }
    }
}

/// Envelope of `GET /reset/{game_id}` and `GET /step/{game_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StateEnvelope {
    #[serde(default)]
    pub state: Option<RawState>,
}

/// Simulation snapshot as the backend reports it.
///
/// Any of the fields may be absent; the client decides which absences are
/// tolerated (unit arrays) and which are not (the envelope's `state`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawState {
    #[serde(default)]
    pub coords: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    pub health: Option<Vec<f64>>,
    #[serde(default)]
    pub step: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_payload_decodes() {
        let json = r#"{
            "game_id": "g-1",
            "terrain": {"cells": [[0, 1], [1, 0]]},
            "place": "Copenhagen, Denmark",
            "size": 128,
            "teams": 2,
            "marks": {
                "king": [64, 64], "queen": [32, 32], "rook": [0, 0],
                "bishop": [16, 16], "knight": [8, 8], "pawn": [4, 4]
            }
        }"#;
        let payload: InitPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.game_id, "g-1");
        assert_eq!(payload.size, 128.0);
        assert_eq!(payload.teams, 2);
        assert_eq!(payload.marks.get(PieceKind::King), [64.0, 64.0]);
        assert_eq!(payload.marks.get(PieceKind::Pawn), [4.0, 4.0]);
    }

    #[test]
    fn state_envelope_decodes_full_state() {
        let json = r#"{"state": {"coords": [[10, 20], [30, 40]], "health": [5, 3], "step": 7}}"#;
        let envelope: StateEnvelope = serde_json::from_str(json).unwrap();
        let state = envelope.state.unwrap();
        assert_eq!(state.coords.unwrap(), vec![[10.0, 20.0], [30.0, 40.0]]);
        assert_eq!(state.health.unwrap(), vec![5.0, 3.0]);
        assert_eq!(state.step, Some(7));
    }

    #[test]
    fn state_envelope_tolerates_missing_fields() {
        let envelope: StateEnvelope = serde_json::from_str(r#"{"state": {}}"#).unwrap();
        let state = envelope.state.unwrap();
        assert!(state.coords.is_none());
        assert!(state.health.is_none());
        assert!(state.step.is_none());

        let empty: StateEnvelope = serde_json::from_str("{}").unwrap();
        assert!(empty.state.is_none());
    }
}
