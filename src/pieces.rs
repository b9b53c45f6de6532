//! Fixed piece ordering shared with the backend.
//!
//! Array-valued payloads (the `sync_marks` request body) are positional by
//! this order, never keyed by name. The order is part of the wire contract
//! and must match the backend's layout exactly; in particular rook comes
//! before bishop. Never reorder or alphabetize it.

use serde::{Deserialize, Serialize};

/// The six entity kinds tracked per session.
///
/// Declaration order is the canonical wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Canonical wire order, built once and immutable.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Stable positional index in `[0, 6)`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase wire name.
    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }

    /// Look up a kind by its wire name.
    ///
    /// `None` marks an unknown name; callers must treat that as a usage
    /// error, never as a valid index.
    pub fn from_name(name: &str) -> Option<PieceKind> {
        PieceKind::ALL.iter().copied().find(|k| k.name() == name)
    }
}
