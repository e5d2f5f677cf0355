//! Input capture: session buffer, event types, and the writer pump.
//!
//! A `CaptureSession` owns the append-only event buffer and the mouse-move
//! sample gate. Embedders either call the handler methods directly or feed
//! `HostEvent`s through the channel-driven writer.

pub mod pump;
pub mod session;
pub mod types;

pub use pump::{spawn_writer, HostEvent};
pub use session::{CaptureSession, MOVE_SAMPLE_GAP_MS};
pub use types::{InputEvent, SessionPayload};
