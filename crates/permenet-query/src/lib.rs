//! permenet-query — Derivation and execution of remote permeability queries.
//!
//! Turns a descriptor snapshot into three independent GraphQL queries
//! (prediction, interpretation, similarity), tracks each one's
//! lifecycle, and guarantees that a response derived from an older
//! snapshot never overwrites the result of a newer one.

pub mod client;
pub mod derive;
pub mod ops;
pub mod service;
pub mod session;
pub mod state;

pub use client::GraphqlClient;
pub use derive::{derive, DerivedQueries, DerivedQuery};
pub use ops::Operation;
pub use service::{MockPermeabilityService, PermeabilityService};
pub use session::{DescriptorSession, SessionSnapshot};
pub use state::{QuerySlot, QueryState};
