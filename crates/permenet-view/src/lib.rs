//! permenet-view — Reconciliation of query results into display-ready
//! view models.
//!
//! The mappers here are pure in their query inputs: whichever subset of
//! the three panel queries has resolved is rendered, and an absent or
//! failed result never blocks a sibling's display.

pub mod atoms;
pub mod mapper;
pub mod model;
pub mod render;
pub mod tanimoto;

pub use mapper::{assemble_panel, map_chart_series, map_scalar, map_similarity_rows};
pub use model::{
    ChartSeries, DescriptorPanel, MoleculeItem, Rendered, Section, SimilarityRow, SpeciesPanel,
    SpeciesResult,
};
pub use render::{DisabledRenderer, MockRenderer, MoleculeRenderer};

/// Denominator of the descriptor-panel permeability score.
pub const DESCRIPTOR_SCORE_SCALE: &str = "3.0";

/// Denominator of the single-molecule (atoms) permeability score.
pub const ATOMS_SCORE_SCALE: &str = "1.0";
