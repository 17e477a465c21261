//! Tanimoto similarity table: sorting and pagination of fingerprint
//! score rows. The service returns rows unordered; presentation order
//! is decided here.

use permenet_common::TanimotoScores;

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

/// Sortable column of the Tanimoto table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fingerprint {
    Maccs,
    Avalon,
    Morgan,
    AtomPair,
    Topological,
    Rdkit,
}

impl Fingerprint {
    fn score_of(self, row: &TanimotoScores) -> f64 {
        match self {
            Fingerprint::Maccs => row.maccs,
            Fingerprint::Avalon => row.avalon,
            Fingerprint::Morgan => row.morgan,
            Fingerprint::AtomPair => row.atom_pair,
            Fingerprint::Topological => row.topological,
            Fingerprint::Rdkit => row.rdkit,
        }
    }
}

/// Sort rows by one fingerprint column, highest similarity first.
/// Stable, so equal scores keep their service order.
pub fn sort_rows(mut rows: Vec<TanimotoScores>, by: Fingerprint) -> Vec<TanimotoScores> {
    rows.sort_by(|a, b| {
        by.score_of(b)
            .partial_cmp(&by.score_of(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

/// One zero-indexed page of rows. Pages past the end are empty.
pub fn paginate(rows: &[TanimotoScores], page: usize) -> &[TanimotoScores] {
    let start = page.saturating_mul(PAGE_SIZE).min(rows.len());
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(smiles: &str, maccs: f64, morgan: f64) -> TanimotoScores {
        TanimotoScores {
            smiles: smiles.to_string(),
            maccs,
            avalon: 0.5,
            morgan,
            atom_pair: 0.5,
            topological: 0.5,
            rdkit: 0.5,
        }
    }

    #[test]
    fn test_sort_descending_by_maccs() {
        let rows = vec![row("a", 0.2, 0.9), row("b", 0.8, 0.1), row("c", 0.5, 0.5)];
        let sorted = sort_rows(rows, Fingerprint::Maccs);
        let order: Vec<&str> = sorted.iter().map(|r| r.smiles.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_column_selection() {
        let rows = vec![row("a", 0.2, 0.9), row("b", 0.8, 0.1)];
        let sorted = sort_rows(rows, Fingerprint::Morgan);
        assert_eq!(sorted[0].smiles, "a");
    }

    #[test]
    fn test_pagination_bounds() {
        let rows: Vec<TanimotoScores> =
            (0..23).map(|i| row(&format!("m{}", i), i as f64 / 23.0, 0.0)).collect();

        assert_eq!(paginate(&rows, 0).len(), 10);
        assert_eq!(paginate(&rows, 2).len(), 3);
        assert!(paginate(&rows, 3).is_empty());
        assert_eq!(paginate(&rows, 1)[0].smiles, "m10");
    }
}
