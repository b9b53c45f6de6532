//! Session client for the skirmish terrain simulation backend.
//!
//! This crate is the adapter between a frontend visualization/editor and a
//! remote simulation service. It drives the session lifecycle and
//! translates between two disjoint coordinate systems:
//!
//! - **display space** — the frontend's fixed `[0, 100)` range, both axes
//! - **simulation space** — a per-session `[0, size)` range reported by the
//!   backend at session creation
//!
//! # Backend surface
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | init | GET | `/init/{place}` |
//! | reset | GET | `/reset/{game_id}` |
//! | step | GET | `/step/{game_id}` |
//! | close | POST | `/close/{game_id}` |
//! | sync_marks | POST | `/marks/{game_id}` |
//!
//! # Example flow
//!
//! ```no_run
//! use skirmish_client::{ClientConfig, Session, SessionClient};
//!
//! # async fn run() -> Result<(), skirmish_client::ClientError> {
//! let client = SessionClient::new(ClientConfig::from_env());
//! let mut session = Session::new();
//! session.open(&client, "Copenhagen, Denmark").await?;
//!
//! let state = session.step(&client).await?;
//! for unit in &state.units {
//!     println!("unit {} at ({:.1}, {:.1})", unit.id, unit.x, unit.y);
//! }
//!
//! session.close(&client).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Everything the caller sees is in display space; everything on the wire
//! is in simulation space. The `sync_marks` write additionally swaps axis
//! order (Y before X) to match the backend's transposed convention — see
//! [`client`] for the contract.
//!
//! # Environment variables
//!
//! - `SKIRMISH_API_URL`: backend base URL (default: `http://127.0.0.1:8000`)

pub mod client;
pub mod config;
pub mod error;
pub mod pieces;
pub mod protocol;
pub mod scale;
pub mod session;
pub mod transport;
pub mod types;

pub use client::{InitOutcome, SessionClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use pieces::PieceKind;
pub use session::{Phase, Session};
pub use transport::{HttpTransport, MockTransport, Transport};
pub use types::{Marks, Scene, SceneConfig, State, Unit, LOCAL_SIZE};
