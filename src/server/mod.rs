//! HTTP scoring service.

pub mod routes;

pub use routes::routes;

use crate::scoring::scorelog::ScoreLog;
use std::net::SocketAddr;
use std::sync::Arc;

/// Serve the scorer on the given address until the task is dropped.
pub async fn run(addr: SocketAddr, log: Arc<ScoreLog>) {
    warp::serve(routes(log)).run(addr).await
}
