//! Descriptor state store: single source of truth for the editable
//! descriptor profile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use permenet_common::{PermenetError, Result};

use crate::defaults::DESCRIPTOR_DEFAULTS;

/// Immutable schema for one descriptor: its name and the range the
/// UI may set it within. `min < max` and `step > 0` hold for every
/// built-in entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorSpec {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// One descriptor: its spec plus the current user-set value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub spec: DescriptorSpec,
    pub value: f64,
}

/// An owned point-in-time copy of the descriptor values, tagged with
/// the store version it was taken at. Values are in fixed descriptor
/// order and are the verbatim argument to descriptor-based queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorVector {
    pub values: Vec<f64>,
    pub version: u64,
}

/// Ordered, fixed-size set of descriptors. The set is created once from
/// built-in defaults and never resized; only values change. Every edit
/// bumps `version`, which downstream query slots compare against to
/// discard stale responses.
#[derive(Debug, Clone)]
pub struct DescriptorStore {
    descriptors: Vec<Descriptor>,
    version: u64,
}

impl DescriptorStore {
    /// Seed the store from the built-in defaults. Infallible.
    pub fn new() -> Self {
        let descriptors = DESCRIPTOR_DEFAULTS
            .iter()
            .map(|&(name, min, max, step, value)| Descriptor {
                spec: DescriptorSpec { name: name.to_string(), min, max, step },
                value,
            })
            .collect();
        Self { descriptors, version: 0 }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The descriptors in fixed order, for slider/input binding.
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// Descriptor names in fixed order (chart label order).
    pub fn names(&self) -> Vec<String> {
        self.descriptors.iter().map(|d| d.spec.name.clone()).collect()
    }

    /// Current store version. Bumped once per accepted edit.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Set one descriptor's value. Out-of-range input is clamped into
    /// `[min, max]`; the value actually stored is returned. Errors on a
    /// bad index or a non-finite value (NaN would pass through `clamp`
    /// and poison every derived query). No other descriptor is touched.
    pub fn set_value(&mut self, index: usize, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(PermenetError::NonFiniteValue(value));
        }
        let descriptor = self
            .descriptors
            .get_mut(index)
            .ok_or(PermenetError::DescriptorIndex(index))?;

        let clamped = value.clamp(descriptor.spec.min, descriptor.spec.max);
        if clamped != value {
            debug!(
                descriptor = %descriptor.spec.name,
                requested = value,
                stored = clamped,
                "descriptor value clamped to range"
            );
        }
        descriptor.value = clamped;
        self.version += 1;
        Ok(clamped)
    }

    /// Owned snapshot of the current values and version. A value, not a
    /// live view: later edits do not show through it.
    pub fn snapshot(&self) -> DescriptorVector {
        DescriptorVector {
            values: self.descriptors.iter().map(|d| d.value).collect(),
            version: self.version,
        }
    }
}

impl Default for DescriptorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_well_formed() {
        let store = DescriptorStore::new();
        assert_eq!(store.len(), 23);
        for d in store.descriptors() {
            assert!(d.spec.min < d.spec.max, "{}", d.spec.name);
            assert!(d.spec.step > 0.0, "{}", d.spec.name);
            assert!(d.value >= d.spec.min && d.value <= d.spec.max, "{}", d.spec.name);
        }
        // No duplicate names.
        let names = store.names();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn test_set_value_touches_only_edited_index() {
        let mut store = DescriptorStore::new();
        let before = store.snapshot();

        store.set_value(4, 7.0).unwrap();
        let after = store.snapshot();

        assert_eq!(after.values[4], 7.0);
        for (i, (old, new)) in before.values.iter().zip(after.values.iter()).enumerate() {
            if i != 4 {
                assert_eq!(old, new, "descriptor {} changed unexpectedly", i);
            }
        }
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let mut store = DescriptorStore::new();
        // HBA range is [1, 20].
        assert_eq!(store.set_value(0, 500.0).unwrap(), 20.0);
        assert_eq!(store.snapshot().values[0], 20.0);
        assert_eq!(store.set_value(0, -3.0).unwrap(), 1.0);
        assert_eq!(store.snapshot().values[0], 1.0);
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        let mut store = DescriptorStore::new();
        let before = store.snapshot();

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                store.set_value(0, bad),
                Err(PermenetError::NonFiniteValue(_))
            ));
        }

        // Nothing stored, no version bump, values all still in range.
        let after = store.snapshot();
        assert_eq!(before, after);
        assert!(after.values[0] >= 1.0 && after.values[0] <= 20.0);
    }

    #[test]
    fn test_bad_index_is_rejected() {
        let mut store = DescriptorStore::new();
        assert!(matches!(
            store.set_value(99, 1.0),
            Err(PermenetError::DescriptorIndex(99))
        ));
    }

    #[test]
    fn test_snapshot_is_a_value_not_a_view() {
        let mut store = DescriptorStore::new();
        let snapshot = store.snapshot();
        let original = snapshot.values[1];
        store.set_value(1, original + 1.0).unwrap();
        assert_eq!(snapshot.values[1], original);
    }

    #[test]
    fn test_version_advances_per_edit() {
        let mut store = DescriptorStore::new();
        assert_eq!(store.version(), 0);
        store.set_value(0, 4.0).unwrap();
        store.set_value(1, 1.0).unwrap();
        assert_eq!(store.version(), 2);
        assert_eq!(store.snapshot().version, 2);
    }
}
