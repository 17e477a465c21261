//! The remote-service seam.
//!
//! `PermeabilityService` is the narrow interface the rest of the
//! workspace talks to; `GraphqlClient` is the production implementation
//! and `MockPermeabilityService` the test double.

use async_trait::async_trait;

use permenet_common::{PermenetError, Result, SimilarMolecule, TanimotoScores};

/// One async method per operation of the remote schema.
#[async_trait]
pub trait PermeabilityService: Send + Sync {
    /// Permeability score for a descriptor vector.
    async fn predict_by_descriptors(&self, descriptors: &[f64]) -> Result<f64>;

    /// Per-descriptor interpretation values, aligned to the input order.
    async fn interpret_by_descriptors(&self, descriptors: &[f64]) -> Result<Vec<f64>>;

    /// Nearest molecules to a point in descriptor space.
    async fn similar_by_descriptors(&self, descriptors: &[f64]) -> Result<Vec<SimilarMolecule>>;

    /// Permeability score for one SMILES string.
    async fn predict_by_atoms(&self, smiles: &str) -> Result<f64>;

    /// Per-atom interpretation scores for one SMILES string.
    async fn interpret_by_atoms(&self, smiles: &str) -> Result<Vec<f64>>;

    /// Permeability scores for a list of SMILES strings, in input order.
    async fn predict_list_by_atoms(&self, smiles_list: &[String]) -> Result<Vec<f64>>;

    /// Per-atom interpretation scores per input molecule, in input order.
    async fn interpret_list_by_atoms(&self, smiles_list: &[String]) -> Result<Vec<Vec<f64>>>;

    /// Tanimoto similarity rows for one SMILES string.
    async fn tanimoto_similarity(&self, smiles: &str) -> Result<Vec<TanimotoScores>>;

    /// Permeability scores for one SMILES across the four species, in
    /// `Species::ALL` order.
    async fn four_species_predict_by_atoms(&self, smiles: &str) -> Result<Vec<f64>>;

    /// Per-atom interpretation scores per species, in `Species::ALL` order.
    async fn four_species_interpret_by_atoms(&self, smiles: &str) -> Result<Vec<Vec<f64>>>;
}

/// Mock service with canned responses for unit tests.
///
/// Unconfigured methods return a query error, so a test only wires up
/// the operations it cares about.
#[derive(Default)]
pub struct MockPermeabilityService {
    prediction: Option<std::result::Result<f64, String>>,
    interpretation: Option<std::result::Result<Vec<f64>, String>>,
    similarity: Option<std::result::Result<Vec<SimilarMolecule>, String>>,
    list_predictions: Option<Vec<f64>>,
    list_interpretations: Option<Vec<Vec<f64>>>,
    tanimoto: Option<Vec<TanimotoScores>>,
}

impl MockPermeabilityService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prediction(mut self, score: f64) -> Self {
        self.prediction = Some(Ok(score));
        self
    }

    pub fn with_prediction_error(mut self, message: &str) -> Self {
        self.prediction = Some(Err(message.to_string()));
        self
    }

    pub fn with_interpretation(mut self, values: Vec<f64>) -> Self {
        self.interpretation = Some(Ok(values));
        self
    }

    pub fn with_similarity(mut self, rows: Vec<SimilarMolecule>) -> Self {
        self.similarity = Some(Ok(rows));
        self
    }

    pub fn with_list_predictions(mut self, scores: Vec<f64>) -> Self {
        self.list_predictions = Some(scores);
        self
    }

    pub fn with_list_interpretations(mut self, scores: Vec<Vec<f64>>) -> Self {
        self.list_interpretations = Some(scores);
        self
    }

    pub fn with_tanimoto(mut self, rows: Vec<TanimotoScores>) -> Self {
        self.tanimoto = Some(rows);
        self
    }

    fn take<T: Clone>(slot: &Option<std::result::Result<T, String>>) -> Result<T> {
        match slot {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(PermenetError::Query(message.clone())),
            None => Err(PermenetError::Query("not configured".to_string())),
        }
    }
}

#[async_trait]
impl PermeabilityService for MockPermeabilityService {
    async fn predict_by_descriptors(&self, _descriptors: &[f64]) -> Result<f64> {
        Self::take(&self.prediction)
    }

    async fn interpret_by_descriptors(&self, _descriptors: &[f64]) -> Result<Vec<f64>> {
        Self::take(&self.interpretation)
    }

    async fn similar_by_descriptors(&self, _descriptors: &[f64]) -> Result<Vec<SimilarMolecule>> {
        Self::take(&self.similarity)
    }

    async fn predict_by_atoms(&self, _smiles: &str) -> Result<f64> {
        Self::take(&self.prediction)
    }

    async fn interpret_by_atoms(&self, _smiles: &str) -> Result<Vec<f64>> {
        Self::take(&self.interpretation)
    }

    async fn predict_list_by_atoms(&self, _smiles_list: &[String]) -> Result<Vec<f64>> {
        self.list_predictions
            .clone()
            .ok_or_else(|| PermenetError::Query("not configured".to_string()))
    }

    async fn interpret_list_by_atoms(&self, _smiles_list: &[String]) -> Result<Vec<Vec<f64>>> {
        self.list_interpretations
            .clone()
            .ok_or_else(|| PermenetError::Query("not configured".to_string()))
    }

    async fn tanimoto_similarity(&self, _smiles: &str) -> Result<Vec<TanimotoScores>> {
        self.tanimoto
            .clone()
            .ok_or_else(|| PermenetError::Query("not configured".to_string()))
    }

    async fn four_species_predict_by_atoms(&self, _smiles: &str) -> Result<Vec<f64>> {
        self.list_predictions
            .clone()
            .ok_or_else(|| PermenetError::Query("not configured".to_string()))
    }

    async fn four_species_interpret_by_atoms(&self, _smiles: &str) -> Result<Vec<Vec<f64>>> {
        self.list_interpretations
            .clone()
            .ok_or_else(|| PermenetError::Query("not configured".to_string()))
    }
}
