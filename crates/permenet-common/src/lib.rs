//! permenet-common — Shared types, errors, and configuration used across all permenet crates.

pub mod config;
pub mod entities;
pub mod error;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use entities::{SimilarMolecule, Species, TanimotoScores};
pub use error::{PermenetError, Result};
