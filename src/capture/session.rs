use crate::capture::types::{InputEvent, SessionPayload};
use parking_lot::Mutex as ParkingMutex;
use std::time::Instant;
use uuid::Uuid;

/// Minimum spacing between two recorded mouse moves, in milliseconds.
/// The gate is strict: a gap of exactly 30ms is still dropped.
pub const MOVE_SAMPLE_GAP_MS: f64 = 30.0;

/// One capture session: an append-only event buffer plus the move-throttle
/// scalar, anchored to a monotonic clock that starts at session creation.
///
/// The session is the single owner of the buffer. Handlers append, the
/// submitter snapshots; nothing ever removes or reorders events. Sharing an
/// `Arc<CaptureSession>` between a writer thread and a submitter is safe:
/// both fields sit behind mutexes and every operation is a short
/// lock-touch-unlock.
pub struct CaptureSession {
    id: Uuid,
    started: Instant,
    events: ParkingMutex<Vec<InputEvent>>,
    last_move_ms: ParkingMutex<Option<f64>>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started: Instant::now(),
            events: ParkingMutex::new(Vec::new()),
            last_move_ms: ParkingMutex::new(None),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Milliseconds elapsed since the session started.
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Record a key press at the current session time.
    pub fn key_down(&self, key: &str) {
        self.key_down_at(self.elapsed_ms(), key);
    }

    /// Record a key release at the current session time.
    pub fn key_up(&self, key: &str) {
        self.key_up_at(self.elapsed_ms(), key);
    }

    /// Record a pointer move at the current session time, subject to the
    /// sample gate. Returns whether the move was recorded.
    pub fn mouse_move(&self, x: f64, y: f64) -> bool {
        self.mouse_move_at(self.elapsed_ms(), x, y)
    }

    /// Record a key press with a caller-supplied timestamp (replayed input).
    pub fn key_down_at(&self, t_ms: f64, key: &str) {
        self.events.lock().push(InputEvent::Down {
            t: t_ms,
            k: key.to_string(),
        });
    }

    /// Record a key release with a caller-supplied timestamp (replayed input).
    pub fn key_up_at(&self, t_ms: f64, key: &str) {
        self.events.lock().push(InputEvent::Up {
            t: t_ms,
            k: key.to_string(),
        });
    }

    /// Record a pointer move with a caller-supplied timestamp.
    ///
    /// Leaky-bucket-of-one: the gate compares only against the last accepted
    /// move, so bursts are downsampled to roughly 33Hz while a long idle gap
    /// builds no credit. The first move of a session is always accepted.
    /// Gated moves are dropped, not merged. Key events are never gated.
    pub fn mouse_move_at(&self, t_ms: f64, x: f64, y: f64) -> bool {
        let mut last = self.last_move_ms.lock();
        let accept = match *last {
            None => true,
            Some(prev) => t_ms - prev > MOVE_SAMPLE_GAP_MS,
        };
        if accept {
            self.events.lock().push(InputEvent::Move { t: t_ms, x, y });
            *last = Some(t_ms);
        }
        accept
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Clone of the buffer as it stands. The buffer itself is left intact;
    /// a later snapshot includes everything this one did.
    pub fn snapshot(&self) -> Vec<InputEvent> {
        self.events.lock().clone()
    }

    /// Build the submission body for this session.
    pub fn payload(&self, user_id: impl Into<String>) -> SessionPayload {
        SessionPayload {
            user_id: user_id.into(),
            events: self.snapshot(),
        }
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}
