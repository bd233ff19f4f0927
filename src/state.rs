//! Application state for the API server.

use std::net::SocketAddr;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::mirror::DeviceConfig;

/// Server configuration, established once at startup and read-only
/// thereafter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
    /// Simulator device configuration (qubit count, shot count).
    pub device: DeviceConfig,
    /// Fixed RNG seed for reproducible sampling. `None` draws from OS
    /// entropy per request.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: ([0, 0, 0, 0], 8000).into(),
            device: DeviceConfig::default(),
            seed: None,
        }
    }
}

/// Shared application state. Handlers never mutate it, so concurrent
/// requests need no locking.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
        }
    }

    pub fn with_config(config: ServerConfig) -> Self {
        Self { config }
    }

    /// RNG for one request's sampling run.
    pub fn sampling_rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
