//! Request and response types for the HTTP API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Query parameters shared by the encrypt and verify endpoints.
#[derive(Debug, Deserialize)]
pub struct BitQuery {
    /// Message bit; must be 0 or 1.
    pub bit: i64,
}

/// Response for `GET /`.
#[derive(Debug, Serialize)]
pub struct LiveResponse {
    pub message: String,
}

impl Default for LiveResponse {
    fn default() -> Self {
        Self {
            message: "Quantum API is live!".to_string(),
        }
    }
}

/// Response for `GET /encrypt` - the raw outcome pairs.
#[derive(Debug, Serialize)]
pub struct EncryptResponse {
    pub input_bit: u8,
    /// One `[q0, q1]` pair per shot, in shot order.
    pub encrypted_output: Vec<Vec<u8>>,
    pub shots: usize,
    pub description: String,
}

/// Response for `GET /verify` - the aggregated distribution.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub input_bit: u8,
    /// Outcome key ("01") to probability, rounded to 4 decimals.
    pub output_distribution: BTreeMap<String, f64>,
    pub entropy: f64,
    pub interpretation: String,
}
