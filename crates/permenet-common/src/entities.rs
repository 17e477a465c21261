//! Shared domain types for the permeability query service.
//!
//! The remote service returns similarity results as positional JSON
//! arrays (`[smiles, score, ...]`), so the row types here deserialize
//! from tuples rather than objects.

use serde::{Deserialize, Serialize};

/// One similarity-search hit: a candidate molecule and its distance to
/// the query point in descriptor space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)")]
pub struct SimilarMolecule {
    pub smiles: String,
    pub distance: f64,
}

impl From<(String, f64)> for SimilarMolecule {
    fn from((smiles, distance): (String, f64)) -> Self {
        Self { smiles, distance }
    }
}

/// Tanimoto similarity scores for one candidate molecule under six
/// fingerprinting schemes. Row layout is fixed by the service schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64, f64, f64, f64, f64, f64)")]
pub struct TanimotoScores {
    pub smiles: String,
    pub maccs: f64,
    pub avalon: f64,
    pub morgan: f64,
    pub atom_pair: f64,
    pub topological: f64,
    pub rdkit: f64,
}

impl From<(String, f64, f64, f64, f64, f64, f64)> for TanimotoScores {
    fn from(
        (smiles, maccs, avalon, morgan, atom_pair, topological, rdkit): (
            String,
            f64,
            f64,
            f64,
            f64,
            f64,
            f64,
        ),
    ) -> Self {
        Self { smiles, maccs, avalon, morgan, atom_pair, topological, rdkit }
    }
}

/// Mycobacterial species covered by the four-species model.
/// Order is fixed and matches the service's result array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Mtb,
    Mab,
    Mav,
    Msm,
}

impl Species {
    /// All species in service result order.
    pub const ALL: [Species; 4] = [Species::Mtb, Species::Mab, Species::Mav, Species::Msm];

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Species::Mtb => "Mtb",
            Species::Mab => "Mab",
            Species::Mav => "Mav",
            Species::Msm => "Msm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similar_molecule_from_pair_array() {
        let row: SimilarMolecule = serde_json::from_str(r#"["c1ccccc1", 0.12]"#).unwrap();
        assert_eq!(row.smiles, "c1ccccc1");
        assert!((row.distance - 0.12).abs() < 1e-12);
    }

    #[test]
    fn test_tanimoto_scores_from_row_array() {
        let row: TanimotoScores =
            serde_json::from_str(r#"["CCO", 0.9, 0.8, 0.7, 0.6, 0.5, 0.4]"#).unwrap();
        assert_eq!(row.smiles, "CCO");
        assert!((row.maccs - 0.9).abs() < 1e-12);
        assert!((row.rdkit - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_species_order_and_labels() {
        let labels: Vec<&str> = Species::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Mtb", "Mab", "Mav", "Msm"]);
    }
}
