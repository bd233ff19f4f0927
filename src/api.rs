//! API endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{BitQuery, EncryptResponse, LiveResponse, VerifyResponse};
use crate::error::ApiError;
use crate::mirror::{self, MessageBit};
use crate::state::AppState;

const ENCRYPT_DESCRIPTION: &str = "Quantum Mirror Encrypted Result";
const VERIFY_INTERPRETATION: &str =
    "Higher entropy indicates more uniform encryption. Entangled bias shows mirrored influence.";

/// GET / - Liveness check.
pub async fn live() -> Json<LiveResponse> {
    Json(LiveResponse::default())
}

/// GET /encrypt - Run the mirror circuit and return the raw outcome pairs.
pub async fn encrypt(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BitQuery>,
) -> Result<Json<EncryptResponse>, ApiError> {
    let bit = parse_bit(params.bit)?;
    let device = state.config.device;

    let samples = mirror::run_shots(bit, &device, &mut state.sampling_rng())?;
    tracing::debug!(bit = bit.value(), shots = samples.len(), "sampled mirror circuit");

    Ok(Json(EncryptResponse {
        input_bit: bit.value(),
        shots: samples.len(),
        encrypted_output: samples,
        description: ENCRYPT_DESCRIPTION.to_string(),
    }))
}

/// GET /verify - Run the mirror circuit and return the outcome distribution
/// with its Shannon entropy.
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BitQuery>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let bit = parse_bit(params.bit)?;
    let device = state.config.device;

    let samples = mirror::run_shots(bit, &device, &mut state.sampling_rng())?;
    let distribution = mirror::outcome_distribution(&samples);
    let entropy = mirror::shannon_entropy(&distribution);
    tracing::debug!(bit = bit.value(), entropy, "verified mirror circuit");

    Ok(Json(VerifyResponse {
        input_bit: bit.value(),
        output_distribution: distribution,
        entropy,
        interpretation: VERIFY_INTERPRETATION.to_string(),
    }))
}

/// Validate the message bit before any circuit is constructed.
fn parse_bit(bit: i64) -> Result<MessageBit, ApiError> {
    MessageBit::try_from(bit).map_err(|_| ApiError::InvalidBit(bit))
}
