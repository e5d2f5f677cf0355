use serde::{Deserialize, Serialize};

/// One captured input event.
///
/// Serialized with an internal `type` tag so the wire shape matches what the
/// scoring endpoint consumes: `{"t": 12.5, "type": "down", "k": "a"}`.
/// `t` is monotonic milliseconds since the capture session started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputEvent {
    /// Key pressed.
    Down { t: f64, k: String },
    /// Key released.
    Up { t: f64, k: String },
    /// Pointer moved (viewport coordinates).
    Move { t: f64, x: f64, y: f64 },
}

impl InputEvent {
    /// Timestamp of the event, milliseconds since session start.
    pub fn t(&self) -> f64 {
        match self {
            InputEvent::Down { t, .. } | InputEvent::Up { t, .. } | InputEvent::Move { t, .. } => {
                *t
            }
        }
    }
}

/// The body POSTed to the risk-scoring endpoint: a user identifier paired
/// with the full event buffer. Built fresh per submission, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub user_id: String,
    pub events: Vec<InputEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_wire_shape() {
        let down = InputEvent::Down {
            t: 12.5,
            k: "a".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&down).unwrap(),
            json!({"type": "down", "t": 12.5, "k": "a"})
        );

        let mv = InputEvent::Move {
            t: 40.0,
            x: 100.0,
            y: 250.0,
        };
        assert_eq!(
            serde_json::to_value(&mv).unwrap(),
            json!({"type": "move", "t": 40.0, "x": 100.0, "y": 250.0})
        );
    }

    #[test]
    fn test_event_roundtrip_from_wire() {
        let raw = r#"{"t": 3.0, "type": "up", "k": "Shift"}"#;
        let event: InputEvent = serde_json::from_str(raw).unwrap();
        assert_eq!(
            event,
            InputEvent::Up {
                t: 3.0,
                k: "Shift".to_string()
            }
        );
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = SessionPayload {
            user_id: "alice".to_string(),
            events: vec![],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"user_id": "alice", "events": []})
        );
    }
}
