//! The atoms-based flows: single-molecule, molecule-list, and
//! four-species views.
//!
//! Unlike the similarity table, where an unparseable SMILES degrades to
//! a text cell, these flows validate the user's input molecule before
//! any query is issued — an invalid molecule blocks submission.

use permenet_common::{PermenetError, Result, Species};
use permenet_query::QueryState;

use crate::model::{MoleculeItem, SpeciesPanel, SpeciesResult};
use crate::render::MoleculeRenderer;

/// Split the molecule-list textarea input into one SMILES per line.
/// Blank lines are dropped; surrounding whitespace is trimmed.
pub fn split_molecule_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Submission gate: true when the toolkit can parse the molecule.
pub async fn check_submission(renderer: &dyn MoleculeRenderer, smiles: &str) -> bool {
    renderer.validate(smiles.trim()).await
}

/// Submission gate for a list: every molecule must parse.
pub async fn check_list_submission(
    renderer: &dyn MoleculeRenderer,
    smiles_list: &[String],
) -> bool {
    for smiles in smiles_list {
        if !renderer.validate(smiles).await {
            return false;
        }
    }
    true
}

/// Zip the list flow's two results by index into one item per molecule.
///
/// Both queries must have succeeded; their lengths must match the
/// submitted list (one score and one atom-score sequence per molecule).
/// A mismatch is a contract violation, never a shorter list.
pub fn zip_molecule_list(
    smiles_list: &[String],
    predictions: &QueryState<Vec<f64>>,
    interpretations: &QueryState<Vec<Vec<f64>>>,
) -> Result<Option<Vec<MoleculeItem>>> {
    let (scores, atom_scores) = match (predictions, interpretations) {
        (QueryState::Success(scores), QueryState::Success(atom_scores)) => (scores, atom_scores),
        _ => return Ok(None),
    };

    if scores.len() != smiles_list.len() {
        return Err(PermenetError::ContractViolation {
            expected: smiles_list.len(),
            actual: scores.len(),
        });
    }
    if atom_scores.len() != smiles_list.len() {
        return Err(PermenetError::ContractViolation {
            expected: smiles_list.len(),
            actual: atom_scores.len(),
        });
    }

    let items = smiles_list
        .iter()
        .zip(scores.iter())
        .zip(atom_scores.iter())
        .map(|((smiles, &score), atoms)| MoleculeItem {
            smiles: smiles.clone(),
            score,
            atom_scores: atoms.clone(),
        })
        .collect();
    Ok(Some(items))
}

/// Assemble the four-species panel, pairing scores and atom
/// interpretations with species in fixed order. Both result sequences
/// must have exactly one entry per species.
pub fn assemble_species_panel(
    predictions: &QueryState<Vec<f64>>,
    interpretations: &QueryState<Vec<Vec<f64>>>,
) -> Result<Option<SpeciesPanel>> {
    let (scores, atom_scores) = match (predictions, interpretations) {
        (QueryState::Success(scores), QueryState::Success(atom_scores)) => (scores, atom_scores),
        _ => return Ok(None),
    };

    let expected = Species::ALL.len();
    if scores.len() != expected {
        return Err(PermenetError::ContractViolation { expected, actual: scores.len() });
    }
    if atom_scores.len() != expected {
        return Err(PermenetError::ContractViolation { expected, actual: atom_scores.len() });
    }

    let results = Species::ALL
        .iter()
        .zip(scores.iter())
        .zip(atom_scores.iter())
        .map(|((&species, &score), atoms)| SpeciesResult {
            species,
            score,
            atom_scores: atoms.clone(),
        })
        .collect();
    Ok(Some(SpeciesPanel { results }))
}
