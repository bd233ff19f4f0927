//! Quantum mirror encryption toy API.
//!
//! A fixed two-qubit circuit is simulated with a small sparse state-vector
//! engine, sampled for a fixed shot count, and exposed over HTTP either as
//! raw samples (`/encrypt`) or as an outcome distribution with Shannon
//! entropy (`/verify`).

pub mod api;
pub mod circuit;
pub mod dto;
pub mod error;
pub mod gates;
pub mod mirror;
pub mod qstate;
pub mod sampler;
pub mod server;
pub mod state;

mod test_util;

use num_complex::Complex;

pub type Qbit = Complex<f64>;

pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, ServerConfig};
