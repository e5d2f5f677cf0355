use crate::capture::session::CaptureSession;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Raw input notification from the embedding shell.
///
/// Timestamps are assigned by the session at append time, so producers only
/// report what happened, not when.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    KeyDown { key: String },
    KeyUp { key: String },
    MouseMove { x: f64, y: f64 },
}

/// Spawn the session writer thread.
///
/// The thread drains host notifications into the session until the sending
/// side closes the channel. Keeping all appends on one thread preserves the
/// single-writer model: handlers and the submitter never race on ordering,
/// the submitter only ever takes snapshots.
pub fn spawn_writer(session: Arc<CaptureSession>, rx: Receiver<HostEvent>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        tracing::debug!(session = %session.id(), "input writer started");

        while let Ok(event) = rx.recv() {
            match event {
                HostEvent::KeyDown { key } => session.key_down(&key),
                HostEvent::KeyUp { key } => session.key_up(&key),
                HostEvent::MouseMove { x, y } => {
                    session.mouse_move(x, y);
                }
            }
        }

        tracing::debug!(
            session = %session.id(),
            events = session.len(),
            "input writer stopped"
        );
    })
}
