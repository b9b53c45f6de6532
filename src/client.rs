//! Session lifecycle operations against the backend.
//!
//! Each operation is one HTTP exchange: request, status check, payload
//! decode, coordinate normalization, typed result. The client holds no
//! per-session state; callers pass every identifier and extent a call
//! needs, so concurrent calls never share anything through this struct.
//!
//! Coordinate handling is asymmetric by contract: inbound marker and unit
//! coordinates are rescaled simulation -> display axis-preserving, while
//! the `sync_marks` write serializes display -> simulation with the axes
//! swapped (Y before X). The backend's axis convention is transposed
//! relative to the frontend's; do not "fix" this.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use tracing::error;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::pieces::PieceKind;
use crate::protocol::{InitPayload, RawState, StateEnvelope};
use crate::scale::{to_display, to_sim};
use crate::transport::{HttpTransport, Transport};
use crate::types::{Marks, Scene, SceneConfig, State, Unit};

/// Result of a successful `init`.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub game_id: String,
    pub scene: Scene,
    /// Initial marker coordinates, already in display space.
    pub marks: Marks,
}

/// Stateless client for the five session operations.
pub struct SessionClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl SessionClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: HttpTransport::new(),
        }
    }
}

impl<T: Transport> SessionClient<T> {
    /// Client over a custom transport; tests use the in-memory mock.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn get_ok(&self, op: &'static str, path: &str) -> Result<String, ClientError> {
        let url = self.url(path);
        let exchange = self
            .transport
            .get(&url)
            .await
            .map_err(|status| transport_failure(op, status))?;
        if !exchange.ok {
            return Err(transport_failure(op, exchange.status));
        }
        Ok(exchange.body)
    }

    async fn post_ok(
        &self,
        op: &'static str,
        path: &str,
        body: Option<String>,
    ) -> Result<(), ClientError> {
        let url = self.url(path);
        let exchange = self
            .transport
            .post(&url, body)
            .await
            .map_err(|status| transport_failure(op, status))?;
        if !exchange.ok {
            return Err(transport_failure(op, exchange.status));
        }
        Ok(())
    }

    /// Create a new game session for a named location.
    ///
    /// `GET /init/{place}` with the place percent-encoded. Marker
    /// coordinates come back in simulation space and are rescaled to
    /// display space using the session's reported size.
    pub async fn init(&self, place: &str) -> Result<InitOutcome, ClientError> {
        const OP: &str = "initialize game";
        let encoded = utf8_percent_encode(place, NON_ALPHANUMERIC).to_string();
        let body = self.get_ok(OP, &format!("/init/{encoded}")).await?;
        let payload: InitPayload = decode(OP, &body)?;

        let mut marks = Marks::default();
        for kind in PieceKind::ALL {
            let [x, y] = payload.marks.get(kind);
            marks.set(
                kind,
                [to_display(x, payload.size), to_display(y, payload.size)],
            );
        }

        Ok(InitOutcome {
            game_id: payload.game_id,
            scene: Scene {
                terrain: payload.terrain,
                cfg: Some(SceneConfig {
                    place: payload.place,
                    size: payload.size,
                    teams: payload.teams,
                }),
            },
            marks,
        })
    }

    /// Restore the session to its initial simulation state.
    ///
    /// The step counter is passed through as reported; an absent field
    /// stays absent here, unlike [`SessionClient::step`].
    pub async fn reset(&self, game_id: &str, scene: &Scene) -> Result<State, ClientError> {
        const OP: &str = "reset game";
        let raw = self.fetch_state(OP, &format!("/reset/{game_id}")).await?;
        Ok(State {
            units: units_from_raw(&raw, scene)?,
            step: raw.step,
        })
    }

    /// Advance the simulation by one tick.
    ///
    /// An absent step counter defaults to 0 here, unlike
    /// [`SessionClient::reset`].
    pub async fn step(&self, game_id: &str, scene: &Scene) -> Result<State, ClientError> {
        const OP: &str = "step game";
        let raw = self.fetch_state(OP, &format!("/step/{game_id}")).await?;
        Ok(State {
            units: units_from_raw(&raw, scene)?,
            step: Some(raw.step.unwrap_or(0)),
        })
    }

    /// Push the full marker set to the backend.
    ///
    /// Wire format: `POST /marks/{game_id}` with a JSON array positional by
    /// piece order, each entry `[to_sim(y), to_sim(x)]` — axes swapped
    /// relative to storage order.
    pub async fn sync_marks(
        &self,
        game_id: &str,
        marks: &Marks,
        size: f64,
    ) -> Result<(), ClientError> {
        const OP: &str = "sync marks";
        let mut payload = Vec::with_capacity(PieceKind::ALL.len());
        for kind in PieceKind::ALL {
            let [x, y] = marks.get(kind);
            payload.push([to_sim(y, size), to_sim(x, size)]);
        }
        let body = serde_json::to_string(&payload).map_err(|source| ClientError::Decode {
            op: OP,
            source,
        })?;
        self.post_ok(OP, &format!("/marks/{game_id}"), Some(body))
            .await
    }

    /// Signal session teardown. No body is returned or expected.
    pub async fn close(&self, game_id: &str) -> Result<(), ClientError> {
        const OP: &str = "close game";
        self.post_ok(OP, &format!("/close/{game_id}"), None).await
    }

    async fn fetch_state(&self, op: &'static str, path: &str) -> Result<RawState, ClientError> {
        let body = self.get_ok(op, path).await?;
        let envelope: StateEnvelope = decode(op, &body)?;
        envelope.state.ok_or_else(|| {
            error!(op, "no state data returned from the server");
            ClientError::MissingState
        })
    }
}

fn transport_failure(op: &'static str, status: String) -> ClientError {
    error!(op, %status, "backend request failed");
    ClientError::Transport { op, status }
}

fn decode<P: DeserializeOwned>(op: &'static str, body: &str) -> Result<P, ClientError> {
    serde_json::from_str(body).map_err(|source| {
        error!(op, %source, "undecodable response body");
        ClientError::Decode { op, source }
    })
}

/// Build display-space units from a raw snapshot.
///
/// Absent coordinate or health lists mean "no units", not an error. The
/// scene's config must be present once there is anything to rescale.
fn units_from_raw(raw: &RawState, scene: &Scene) -> Result<Vec<Unit>, ClientError> {
    let (Some(coords), Some(health)) = (&raw.coords, &raw.health) else {
        return Ok(Vec::new());
    };

    let cfg = scene.cfg.as_ref().ok_or_else(|| {
        error!("scene configuration is missing");
        ClientError::MissingSceneConfig
    })?;

    Ok(coords
        .iter()
        .enumerate()
        .map(|(id, coord)| Unit {
            id,
            x: to_display(coord[0], cfg.size),
            y: to_display(coord[1], cfg.size),
            size: 1.0,
            health: health.get(id).copied().unwrap_or_default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with_size(size: f64) -> Scene {
        Scene {
            terrain: serde_json::Value::Null,
            cfg: Some(SceneConfig {
                place: "test".to_string(),
                size,
                teams: 2,
            }),
        }
    }

    #[test]
    fn units_scale_by_session_size() {
        let raw = RawState {
            coords: Some(vec![[10.0, 20.0], [30.0, 40.0]]),
            health: Some(vec![5.0, 3.0]),
            step: None,
        };
        let units = units_from_raw(&raw, &scene_with_size(128.0)).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].id, 0);
        assert!((units[0].x - 7.8125).abs() < 1e-9);
        assert!((units[0].y - 15.625).abs() < 1e-9);
        assert_eq!(units[0].health, 5.0);
        assert_eq!(units[1].id, 1);
        assert!((units[1].x - 23.4375).abs() < 1e-9);
        assert!((units[1].y - 31.25).abs() < 1e-9);
        assert_eq!(units[1].health, 3.0);
    }

    #[test]
    fn absent_unit_arrays_yield_no_units() {
        let no_coords = RawState {
            coords: None,
            health: Some(vec![1.0]),
            step: Some(3),
        };
        assert!(units_from_raw(&no_coords, &scene_with_size(128.0))
            .unwrap()
            .is_empty());

        let no_health = RawState {
            coords: Some(vec![[1.0, 2.0]]),
            health: None,
            step: None,
        };
        assert!(units_from_raw(&no_health, &scene_with_size(128.0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn missing_scene_cfg_is_a_usage_error() {
        let raw = RawState {
            coords: Some(vec![[1.0, 2.0]]),
            health: Some(vec![1.0]),
            step: None,
        };
        let scene = Scene::default();
        let err = units_from_raw(&raw, &scene).unwrap_err();
        assert!(matches!(err, ClientError::MissingSceneConfig));
    }

    #[test]
    fn empty_unit_arrays_skip_the_cfg_requirement() {
        // Matches the decode order: the no-units shortcut runs before the
        // cfg check, so a bare scene with no unit data is fine.
        let raw = RawState::default();
        assert!(units_from_raw(&raw, &Scene::default()).unwrap().is_empty());
    }
}
