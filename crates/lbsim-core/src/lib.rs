//! lbsim-core — shared types for the load-balancer simulation.
//!
//! Holds the immutable `Request` value, the `SimulationConfig` loaded from
//! `lbsim.toml`, and the configuration error taxonomy.

pub mod config;
pub mod error;
pub mod request;

pub use config::SimulationConfig;
pub use error::{ConfigError, ConfigResult};
pub use request::{Category, Request};
