//! Pure derivation of the three descriptor-panel queries from a
//! descriptor snapshot. No network access happens here.

use permenet_descriptors::DescriptorVector;

use crate::ops::Operation;

/// One request descriptor: which operation to run, with which argument,
/// derived from which store version.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedQuery {
    pub operation: Operation,
    pub descriptors: Vec<f64>,
    pub version: u64,
}

/// The three descriptor-panel requests derived from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedQueries {
    pub prediction: DerivedQuery,
    pub interpretation: DerivedQuery,
    pub similarity: DerivedQuery,
}

/// Derive the prediction, interpretation, and similarity requests from a
/// snapshot. Deterministic and side-effect-free.
pub fn derive(vector: &DescriptorVector) -> DerivedQueries {
    let request = |operation| DerivedQuery {
        operation,
        descriptors: vector.values.clone(),
        version: vector.version,
    };
    DerivedQueries {
        prediction: request(Operation::PredictByDescriptors),
        interpretation: request(Operation::InterpretByDescriptors),
        similarity: request(Operation::SimilarByDescriptors),
    }
}
