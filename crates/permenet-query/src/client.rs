//! GraphQL client for the permeability query service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use permenet_common::{
    PermenetError, Result, ServiceConfig, SimilarMolecule, TanimotoScores,
};

use crate::ops::Operation;
use crate::service::PermeabilityService;

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// Endpoint-pinned HTTP client. All requests go to the one configured
/// GraphQL endpoint with a config-driven timeout.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: Client,
    endpoint: String,
}

impl GraphqlClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PermenetError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint: config.endpoint.clone() })
    }

    /// POST one operation and deserialize its payload out of `data`.
    /// Service-side errors surface as `PermenetError::Query`; nothing
    /// panics past this point.
    #[instrument(skip(self, variables), fields(operation = operation.field_name()))]
    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        operation: Operation,
        variables: serde_json::Value,
    ) -> Result<T> {
        let body = json!({
            "query": operation.document(),
            "variables": variables,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .json::<GraphqlResponse>()
            .await?;

        if !response.errors.is_empty() {
            let message = response
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(PermenetError::Query(message));
        }

        let payload = response
            .data
            .and_then(|mut data| {
                let field = data.get_mut(operation.field_name())?;
                Some(field.take())
            })
            .ok_or_else(|| {
                PermenetError::Query(format!(
                    "response missing field {}",
                    operation.field_name()
                ))
            })?;

        debug!("query resolved");
        Ok(serde_json::from_value(payload)?)
    }
}

#[async_trait]
impl PermeabilityService for GraphqlClient {
    async fn predict_by_descriptors(&self, descriptors: &[f64]) -> Result<f64> {
        let op = Operation::PredictByDescriptors;
        self.execute(op, json!({ (op.variable_name()): descriptors })).await
    }

    async fn interpret_by_descriptors(&self, descriptors: &[f64]) -> Result<Vec<f64>> {
        let op = Operation::InterpretByDescriptors;
        self.execute(op, json!({ (op.variable_name()): descriptors })).await
    }

    async fn similar_by_descriptors(&self, descriptors: &[f64]) -> Result<Vec<SimilarMolecule>> {
        let op = Operation::SimilarByDescriptors;
        self.execute(op, json!({ (op.variable_name()): descriptors })).await
    }

    async fn predict_by_atoms(&self, smiles: &str) -> Result<f64> {
        let op = Operation::PredictByAtoms;
        self.execute(op, json!({ (op.variable_name()): smiles })).await
    }

    async fn interpret_by_atoms(&self, smiles: &str) -> Result<Vec<f64>> {
        let op = Operation::InterpretByAtoms;
        self.execute(op, json!({ (op.variable_name()): smiles })).await
    }

    async fn predict_list_by_atoms(&self, smiles_list: &[String]) -> Result<Vec<f64>> {
        let op = Operation::PredictListByAtoms;
        self.execute(op, json!({ (op.variable_name()): smiles_list })).await
    }

    async fn interpret_list_by_atoms(&self, smiles_list: &[String]) -> Result<Vec<Vec<f64>>> {
        let op = Operation::InterpretListByAtoms;
        self.execute(op, json!({ (op.variable_name()): smiles_list })).await
    }

    async fn tanimoto_similarity(&self, smiles: &str) -> Result<Vec<TanimotoScores>> {
        let op = Operation::TanimotoSimilarity;
        self.execute(op, json!({ (op.variable_name()): smiles })).await
    }

    async fn four_species_predict_by_atoms(&self, smiles: &str) -> Result<Vec<f64>> {
        let op = Operation::FourSpeciesPredictByAtoms;
        self.execute(op, json!({ (op.variable_name()): smiles })).await
    }

    async fn four_species_interpret_by_atoms(&self, smiles: &str) -> Result<Vec<Vec<f64>>> {
        let op = Operation::FourSpeciesInterpretByAtoms;
        self.execute(op, json!({ (op.variable_name()): smiles })).await
    }
}
