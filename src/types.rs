//! Domain types exposed to the caller.
//!
//! Everything here is in display space: coordinates lie in
//! `[0, LOCAL_SIZE)`. Simulation-space payloads live in [`crate::protocol`]
//! and never leak past the client.

use serde::{Deserialize, Serialize};

use crate::pieces::PieceKind;

/// Fixed extent of the display coordinate space, both axes.
pub const LOCAL_SIZE: f64 = 100.0;

/// Session configuration produced once at init.
///
/// `size` is the simulation-space extent and is required by every call that
/// rescales coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub place: String,
    pub size: f64,
    pub teams: u32,
}

/// Immutable terrain payload plus session configuration.
///
/// The terrain is opaque to this layer; it is decoded once at init and
/// handed straight to the rendering side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub terrain: serde_json::Value,
    pub cfg: Option<SceneConfig>,
}

/// One display-space coordinate per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Marks {
    pub king: [f64; 2],
    pub queen: [f64; 2],
    pub rook: [f64; 2],
    pub bishop: [f64; 2],
    pub knight: [f64; 2],
    pub pawn: [f64; 2],
}

impl Marks {
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

    pub fn set(&mut self, kind: PieceKind, coord: [f64; 2]) {
        match kind {
            PieceKind::King => self.king = coord,
            PieceKind::Queen => self.queen = coord,
            PieceKind::Rook => self.rook = coord,
            PieceKind::Bishop => self.bishop = coord,
            PieceKind::Knight => self.knight = coord,
            PieceKind::Pawn => self.pawn = coord,
        }
    }

    /// Coordinates in canonical piece order.
    pub fn ordered(&self) -> [[f64; 2]; 6] {
        [
            self.king,
            self.queen,
            self.rook,
            self.bishop,
            self.knight,
            self.pawn,
        ]
    }
}

/// A display-space unit.
///
/// Identity derives from the position index in the backend's coordinate
/// list; `health` is index-aligned with the backend's health array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    /// Render size. The backend does not report one; defaults to 1.
    pub size: f64,
    pub health: f64,
}

/// Per-step simulation snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub units: Vec<Unit>,
    /// Step counter as reported by the backend. `step` substitutes 0 when
    /// the field is absent; `reset` passes the absence through unchanged.
    pub step: Option<u64>,
}
