//! Session submission to the risk-scoring endpoint.

pub mod client;

pub use client::{ScoreClient, SubmitError, DEFAULT_ENDPOINT};
