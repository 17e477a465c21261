//! View-model types handed to the chart/table widgets.

use serde::{Deserialize, Serialize};

use permenet_common::Species;
use permenet_query::QueryState;

/// Display state of one panel section, mirroring the underlying query
/// lifecycle. One section failing never hides a sibling section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Section<T> {
    Pending,
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Section<T> {
    /// Project a query state into a display section through `f`.
    pub fn from_state<U>(state: &QueryState<U>, f: impl FnOnce(&U) -> T) -> Self {
        match state {
            QueryState::NotStarted => Section::Pending,
            QueryState::Loading => Section::Loading,
            QueryState::Error(message) => Section::Failed(message.clone()),
            QueryState::Success(data) => Section::Ready(f(data)),
        }
    }
}

/// Label/value series for the interpretation bar chart, positionally
/// aligned with the descriptor set order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Rendered form of a molecule cell: a structural drawing when the
/// toolkit produced one, the raw SMILES text otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rendered {
    Svg(String),
    Plain(String),
}

/// One row of the similarity table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRow {
    pub smiles: String,
    pub distance: f64,
    pub rendered: Rendered,
}

/// The whole descriptor panel, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorPanel {
    /// Formatted score, e.g. `"1.50 / 3.0"`.
    pub score: Section<String>,
    pub chart: Section<ChartSeries>,
    pub rows: Section<Vec<SimilarityRow>>,
}

/// One molecule of the list flow: its score zipped by index with its
/// per-atom interpretation scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoleculeItem {
    pub smiles: String,
    pub score: f64,
    pub atom_scores: Vec<f64>,
}

/// Per-species result of the four-species flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesResult {
    pub species: Species,
    pub score: f64,
    pub atom_scores: Vec<f64>,
}

/// The four-species panel in fixed species order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesPanel {
    pub results: Vec<SpeciesResult>,
}
