//! The remote query-service schema, as a closed catalogue.
//!
//! Every operation takes exactly one argument. Field and variable names
//! are owned here and used consistently by both the client (to build the
//! request) and the response handling (to pick the payload out of the
//! GraphQL `data` object), so the two can never drift apart.

use serde::{Deserialize, Serialize};

/// One operation of the remote permeability service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Permeability score from a molecular-descriptor vector.
    PredictByDescriptors,
    /// Per-descriptor interpretation values for a descriptor vector.
    InterpretByDescriptors,
    /// Nearest molecules to a point in descriptor space.
    SimilarByDescriptors,
    /// Permeability score for one SMILES string.
    PredictByAtoms,
    /// Per-atom interpretation scores for one SMILES string.
    InterpretByAtoms,
    /// Permeability scores for a list of SMILES strings.
    PredictListByAtoms,
    /// Per-atom interpretation scores for a list of SMILES strings.
    InterpretListByAtoms,
    /// Tanimoto similarity under six fingerprint schemes.
    TanimotoSimilarity,
    /// Four-species permeability scores for one SMILES string.
    FourSpeciesPredictByAtoms,
    /// Four-species per-atom interpretation for one SMILES string.
    FourSpeciesInterpretByAtoms,
}

impl Operation {
    /// GraphQL field name; also the key of the payload in `data`.
    pub fn field_name(self) -> &'static str {
        match self {
            Operation::PredictByDescriptors => "predictPermeabilityByMolecularDescriptors",
            Operation::InterpretByDescriptors => "interpretPermeabilityByMolecularDescriptors",
            Operation::SimilarByDescriptors => "findSimilarMoleculesByMolecularDescriptors",
            Operation::PredictByAtoms => "predictPermeabilityByAtoms",
            Operation::InterpretByAtoms => "interpretPermeabilityByAtoms",
            Operation::PredictListByAtoms => "predictPermeabilityOfListByAtoms",
            Operation::InterpretListByAtoms => "interpretPermeabilityOfListByAtoms",
            Operation::TanimotoSimilarity => "findSimilarMoleculesByTanimotoSimilarity",
            Operation::FourSpeciesPredictByAtoms => "fourSpeciesPredictPermeabilityByAtoms",
            Operation::FourSpeciesInterpretByAtoms => "fourSpeciesInterpretPermeabilityByAtoms",
        }
    }

    /// Name of the operation's single variable.
    pub fn variable_name(self) -> &'static str {
        match self {
            Operation::PredictByDescriptors
            | Operation::InterpretByDescriptors
            | Operation::SimilarByDescriptors => "descriptors",
            Operation::PredictListByAtoms | Operation::InterpretListByAtoms => "molList",
            Operation::TanimotoSimilarity => "molSmiles",
            _ => "molSmile",
        }
    }

    /// GraphQL type of the operation's single variable.
    pub fn variable_type(self) -> &'static str {
        match self {
            Operation::PredictByDescriptors
            | Operation::InterpretByDescriptors
            | Operation::SimilarByDescriptors => "Descriptors!",
            Operation::PredictListByAtoms | Operation::InterpretListByAtoms => "[String]!",
            _ => "String!",
        }
    }

    /// The full query document for this operation.
    pub fn document(self) -> String {
        format!(
            "query (${var}: {ty}){{ {field}({var}:${var}) }}",
            var = self.variable_name(),
            ty = self.variable_type(),
            field = self.field_name(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_documents() {
        assert_eq!(
            Operation::PredictByDescriptors.document(),
            "query ($descriptors: Descriptors!)\
             { predictPermeabilityByMolecularDescriptors(descriptors:$descriptors) }"
        );
        assert_eq!(
            Operation::SimilarByDescriptors.field_name(),
            "findSimilarMoleculesByMolecularDescriptors"
        );
    }

    #[test]
    fn test_atoms_documents() {
        assert_eq!(
            Operation::PredictByAtoms.document(),
            "query ($molSmile: String!){ predictPermeabilityByAtoms(molSmile:$molSmile) }"
        );
        assert_eq!(
            Operation::PredictListByAtoms.document(),
            "query ($molList: [String]!){ predictPermeabilityOfListByAtoms(molList:$molList) }"
        );
        assert_eq!(
            Operation::TanimotoSimilarity.document(),
            "query ($molSmiles: String!)\
             { findSimilarMoleculesByTanimotoSimilarity(molSmiles:$molSmiles) }"
        );
    }
}
