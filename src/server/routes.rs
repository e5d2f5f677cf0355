use crate::capture::types::SessionPayload;
use crate::scoring::risk::RiskReport;
use crate::scoring::scorelog::ScoreLog;
use std::convert::Infallible;
use std::sync::Arc;
use warp::{Filter, Rejection, Reply};

/// All scorer routes: `GET /health` and `POST /risk_score`.
pub fn routes(
    log: Arc<ScoreLog>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    health().or(risk_score(log))
}

/// `GET /health`: liveness probe.
fn health() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::json(&serde_json::json!({"status": "ok"})))
}

/// `POST /risk_score`: score a submitted session.
fn risk_score(
    log: Arc<ScoreLog>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("risk_score")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_score_log(log))
        .and_then(handle_risk_score)
}

/// Inject the shared score log into handlers.
fn with_score_log(
    log: Arc<ScoreLog>,
) -> impl Filter<Extract = (Arc<ScoreLog>,), Error = Infallible> + Clone {
    warp::any().map(move || log.clone())
}

async fn handle_risk_score(
    session: SessionPayload,
    log: Arc<ScoreLog>,
) -> Result<impl Reply, Rejection> {
    let report = RiskReport::from_events(&session.events);

    tracing::info!(
        user = %session.user_id,
        events = session.events.len(),
        risk_pct = report.risk_pct,
        decision = %report.decision,
        "scored session"
    );

    // The score matters more than the audit trail: a log failure is
    // reported but the caller still gets the decision.
    if let Err(err) = log.append(&session.user_id, &report) {
        tracing::error!("failed to append score log: {}", err);
    }

    Ok(warp::reply::json(&report))
}
