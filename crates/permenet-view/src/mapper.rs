//! Mapping of query results to view models.

use tracing::warn;

use permenet_common::{PermenetError, Result, SimilarMolecule};
use permenet_query::{QueryState, SessionSnapshot};

use crate::model::{ChartSeries, DescriptorPanel, Rendered, Section, SimilarityRow};
use crate::render::MoleculeRenderer;

/// Sentinel shown while the prediction has not resolved.
pub const SCORE_NOT_AVAILABLE: &str = "not available";

/// Format the predicted score to two decimals over its scale
/// (`1.4999` -> `"1.50 / 3.0"`), or the sentinel when the query has
/// not succeeded.
pub fn map_scalar(state: &QueryState<f64>, scale: &str) -> String {
    match state {
        QueryState::Success(score) => format!("{:.2} / {}", score, scale),
        _ => SCORE_NOT_AVAILABLE.to_string(),
    }
}

/// Zip descriptor names with interpretation values positionally.
///
/// Returns `Ok(None)` while the query has not succeeded. A length
/// mismatch between names and values breaks the positional contract
/// shared with the descriptor set and is an error, never a truncated
/// or padded series.
pub fn map_chart_series(
    state: &QueryState<Vec<f64>>,
    names: &[String],
) -> Result<Option<ChartSeries>> {
    let values = match state {
        QueryState::Success(values) => values,
        _ => return Ok(None),
    };

    if values.len() != names.len() {
        warn!(expected = names.len(), actual = values.len(), "interpretation length mismatch");
        return Err(PermenetError::ContractViolation {
            expected: names.len(),
            actual: values.len(),
        });
    }

    Ok(Some(ChartSeries { labels: names.to_vec(), values: values.clone() }))
}

/// Build one table row per similarity hit, preserving input order and
/// count. Each row's molecule cell is rendered through the injected
/// renderer; an unparseable SMILES falls back to the raw text and the
/// row is kept.
pub async fn map_similarity_rows(
    state: &QueryState<Vec<SimilarMolecule>>,
    renderer: &dyn MoleculeRenderer,
) -> Option<Vec<SimilarityRow>> {
    let hits = state.data()?;

    let mut rows = Vec::with_capacity(hits.len());
    for hit in hits {
        let rendered = match renderer.render_svg(&hit.smiles).await {
            Some(svg) => Rendered::Svg(svg),
            None => Rendered::Plain(hit.smiles.clone()),
        };
        rows.push(SimilarityRow { smiles: hit.smiles.clone(), distance: hit.distance, rendered });
    }
    Some(rows)
}

/// Assemble the whole descriptor panel from one session snapshot.
///
/// Each section reflects its own query's lifecycle; the interpretation
/// length-contract violation surfaces as that section's failure without
/// touching the other two.
pub async fn assemble_panel(
    snapshot: &SessionSnapshot,
    names: &[String],
    renderer: &dyn MoleculeRenderer,
) -> DescriptorPanel {
    let score = Section::from_state(&snapshot.prediction, |score| {
        format!("{:.2} / {}", score, crate::DESCRIPTOR_SCORE_SCALE)
    });

    let chart = match map_chart_series(&snapshot.interpretation, names) {
        Ok(Some(series)) => Section::Ready(series),
        Err(e) => Section::Failed(e.to_string()),
        Ok(None) => match &snapshot.interpretation {
            QueryState::Error(message) => Section::Failed(message.clone()),
            QueryState::Loading => Section::Loading,
            _ => Section::Pending,
        },
    };

    let rows = match map_similarity_rows(&snapshot.similarity, renderer).await {
        Some(rows) => Section::Ready(rows),
        None => match &snapshot.similarity {
            QueryState::Error(message) => Section::Failed(message.clone()),
            QueryState::Loading => Section::Loading,
            _ => Section::Pending,
        },
    };

    DescriptorPanel { score, chart, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MockRenderer;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_map_scalar_formats_two_decimals_with_scale() {
        let state = QueryState::Success(1.4999);
        assert_eq!(map_scalar(&state, "3.0"), "1.50 / 3.0");
    }

    #[test]
    fn test_map_scalar_sentinel_for_non_success() {
        assert_eq!(map_scalar(&QueryState::NotStarted, "3.0"), SCORE_NOT_AVAILABLE);
        assert_eq!(map_scalar(&QueryState::Loading, "3.0"), SCORE_NOT_AVAILABLE);
        assert_eq!(
            map_scalar(&QueryState::Error("boom".to_string()), "3.0"),
            SCORE_NOT_AVAILABLE
        );
    }

    #[test]
    fn test_map_scalar_atoms_scale() {
        let state = QueryState::Success(0.999);
        assert_eq!(map_scalar(&state, crate::ATOMS_SCORE_SCALE), "1.00 / 1.0");
    }

    #[test]
    fn test_map_chart_series_zips_positionally() {
        let state = QueryState::Success(vec![0.1, 0.4, -0.2]);
        let series = map_chart_series(&state, &names(&["HBA", "HBD", "MW"])).unwrap().unwrap();
        assert_eq!(series.labels, vec!["HBA", "HBD", "MW"]);
        assert_eq!(series.values, vec![0.1, 0.4, -0.2]);
    }

    #[test]
    fn test_map_chart_series_length_mismatch_is_an_error() {
        let state = QueryState::Success(vec![0.1, 0.4]);
        let result = map_chart_series(&state, &names(&["HBA", "HBD", "MW"]));
        assert!(matches!(
            result,
            Err(PermenetError::ContractViolation { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_map_chart_series_absent_until_success() {
        assert_eq!(map_chart_series(&QueryState::Loading, &names(&["HBA"])).unwrap(), None);
    }

    #[tokio::test]
    async fn test_similarity_rows_preserve_order_and_fall_back() {
        let state = QueryState::Success(vec![
            SimilarMolecule { smiles: "c1ccccc1".to_string(), distance: 0.12 },
            SimilarMolecule { smiles: "CCO".to_string(), distance: 0.88 },
        ]);
        let renderer = MockRenderer::new().with_invalid("CCO");

        let rows = map_similarity_rows(&state, &renderer).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].smiles, "c1ccccc1");
        assert!(matches!(rows[0].rendered, Rendered::Svg(_)));
        // Unparseable SMILES keeps its row, rendered as raw text.
        assert_eq!(rows[1].smiles, "CCO");
        assert_eq!(rows[1].rendered, Rendered::Plain("CCO".to_string()));
        assert!((rows[1].distance - 0.88).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_mapper_is_idempotent() {
        let snapshot = SessionSnapshot {
            prediction: QueryState::Success(2.251),
            interpretation: QueryState::Success(vec![0.5, -0.5]),
            similarity: QueryState::Success(vec![SimilarMolecule {
                smiles: "CCN".to_string(),
                distance: 0.3,
            }]),
        };
        let labels = names(&["HBA", "HBD"]);
        let renderer = MockRenderer::new();

        let first = assemble_panel(&snapshot, &labels, &renderer).await;
        let second = assemble_panel(&snapshot, &labels, &renderer).await;
        assert_eq!(first, second);
        assert_eq!(first.score, Section::Ready("2.25 / 3.0".to_string()));
    }

    #[tokio::test]
    async fn test_panel_sections_are_independent() {
        let snapshot = SessionSnapshot {
            prediction: QueryState::Error("prediction failed".to_string()),
            interpretation: QueryState::Success(vec![0.1]),
            similarity: QueryState::Loading,
        };
        let labels = names(&["HBA"]);
        let renderer = MockRenderer::new();

        let panel = assemble_panel(&snapshot, &labels, &renderer).await;
        assert_eq!(panel.score, Section::Failed("prediction failed".to_string()));
        assert!(matches!(panel.chart, Section::Ready(_)));
        assert_eq!(panel.rows, Section::Loading);
    }
}
