//! The chemistry-rendering seam.
//!
//! The real renderer is an external toolkit with an asynchronous
//! one-time initialization; the host constructs it after that init
//! completes and injects it here. The core never reaches for a global.

use async_trait::async_trait;
use std::collections::HashSet;

/// Narrow interface to the chemistry toolkit: parse-validate a SMILES
/// string and render it to an SVG drawing. A `None` from `render_svg`
/// means "rendering unavailable", which callers treat as a row-local
/// fallback, never an error.
#[async_trait]
pub trait MoleculeRenderer: Send + Sync {
    /// Whether the toolkit can parse this SMILES string.
    async fn validate(&self, smiles: &str) -> bool;

    /// Structural SVG for the molecule, or `None` if it cannot be
    /// parsed or the toolkit is unavailable.
    async fn render_svg(&self, smiles: &str) -> Option<String>;
}

/// Renderer used when the toolkit failed to initialize: everything
/// validates (submission is not blocked) and nothing renders (rows fall
/// back to raw text).
pub struct DisabledRenderer;

#[async_trait]
impl MoleculeRenderer for DisabledRenderer {
    async fn validate(&self, _smiles: &str) -> bool {
        true
    }

    async fn render_svg(&self, _smiles: &str) -> Option<String> {
        None
    }
}

/// Mock renderer with configurable unparseable strings, for unit tests.
#[derive(Default)]
pub struct MockRenderer {
    invalid: HashSet<String>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a SMILES string as unparseable.
    pub fn with_invalid(mut self, smiles: &str) -> Self {
        self.invalid.insert(smiles.to_string());
        self
    }
}

#[async_trait]
impl MoleculeRenderer for MockRenderer {
    async fn validate(&self, smiles: &str) -> bool {
        !self.invalid.contains(smiles)
    }

    async fn render_svg(&self, smiles: &str) -> Option<String> {
        if self.invalid.contains(smiles) {
            None
        } else {
            Some(format!("<svg><!-- {} --></svg>", smiles))
        }
    }
}
