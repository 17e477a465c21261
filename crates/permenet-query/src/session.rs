//! Orchestrator for the descriptor panel: store + service + three slots.
//!
//! Every accepted edit takes a fresh snapshot and re-issues all three
//! queries from it. The three requests are independent in-flight tasks;
//! each applies its outcome through its slot's version check, so a
//! response for a superseded snapshot is discarded on arrival.

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::debug;

use permenet_common::{Result, SimilarMolecule};
use permenet_descriptors::{Descriptor, DescriptorStore, DescriptorVector};

use crate::derive::derive;
use crate::service::PermeabilityService;
use crate::state::{QuerySlot, QueryState};

/// Point-in-time copy of the three query states, for the view mapper.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub prediction: QueryState<f64>,
    pub interpretation: QueryState<Vec<f64>>,
    pub similarity: QueryState<Vec<SimilarMolecule>>,
}

pub struct DescriptorSession {
    store: Mutex<DescriptorStore>,
    service: Arc<dyn PermeabilityService>,
    prediction: Arc<QuerySlot<f64>>,
    interpretation: Arc<QuerySlot<Vec<f64>>>,
    similarity: Arc<QuerySlot<Vec<SimilarMolecule>>>,
    in_flight: Mutex<Vec<JoinHandle<()>>>,
}

impl DescriptorSession {
    pub fn new(service: Arc<dyn PermeabilityService>) -> Self {
        Self {
            store: Mutex::new(DescriptorStore::new()),
            service,
            prediction: Arc::new(QuerySlot::new()),
            interpretation: Arc::new(QuerySlot::new()),
            similarity: Arc::new(QuerySlot::new()),
            in_flight: Mutex::new(Vec::new()),
        }
    }

    /// The descriptors in fixed order, for the input widgets.
    pub fn descriptors(&self) -> Vec<Descriptor> {
        self.store.lock().unwrap_or_else(|e| e.into_inner()).descriptors().to_vec()
    }

    /// Descriptor names in fixed order (chart label order).
    pub fn descriptor_names(&self) -> Vec<String> {
        self.store.lock().unwrap_or_else(|e| e.into_inner()).names()
    }

    /// Apply one edit and re-issue all three queries from the new
    /// snapshot. Returns the value actually stored (clamped to range).
    pub fn set_value(&self, index: usize, value: f64) -> Result<f64> {
        let (stored, vector) = {
            let mut store = self.store.lock().unwrap_or_else(|e| e.into_inner());
            let stored = store.set_value(index, value)?;
            debug!(index, stored, version = store.version(), "descriptor edited");
            (stored, store.snapshot())
        };
        self.issue(vector);
        Ok(stored)
    }

    /// Issue all three queries from the current snapshot without an
    /// edit (initial page load).
    pub fn refresh(&self) {
        let vector = self.store.lock().unwrap_or_else(|e| e.into_inner()).snapshot();
        self.issue(vector);
    }

    fn issue(&self, vector: DescriptorVector) {
        let queries = derive(&vector);

        let mut handles = Vec::with_capacity(3);

        self.prediction.begin(queries.prediction.version);
        let slot = Arc::clone(&self.prediction);
        let service = Arc::clone(&self.service);
        let request = queries.prediction;
        handles.push(tokio::spawn(async move {
            let result = service.predict_by_descriptors(&request.descriptors).await;
            slot.apply(request.version, result);
        }));

        self.interpretation.begin(queries.interpretation.version);
        let slot = Arc::clone(&self.interpretation);
        let service = Arc::clone(&self.service);
        let request = queries.interpretation;
        handles.push(tokio::spawn(async move {
            let result = service.interpret_by_descriptors(&request.descriptors).await;
            slot.apply(request.version, result);
        }));

        self.similarity.begin(queries.similarity.version);
        let slot = Arc::clone(&self.similarity);
        let service = Arc::clone(&self.service);
        let request = queries.similarity;
        handles.push(tokio::spawn(async move {
            let result = service.similar_by_descriptors(&request.descriptors).await;
            slot.apply(request.version, result);
        }));

        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        // Hosts poll `snapshot` and may never call `wait_idle`, so drop
        // handles of completed tasks here instead of accumulating them
        // for the life of the session.
        in_flight.retain(|handle| !handle.is_finished());
        in_flight.extend(handles);
    }

    /// Await every task issued so far. The view never needs this (it
    /// polls `snapshot`), but hosts and tests use it to drain work.
    pub async fn wait_idle(&self) {
        let handles: Vec<JoinHandle<()>> = std::mem::take(
            &mut *self.in_flight.lock().unwrap_or_else(|e| e.into_inner()),
        );
        for handle in handles {
            let _ = handle.await;
        }
    }

    /// Current states of the three queries. Whatever subset is ready is
    /// renderable; the rest report loading/error independently.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            prediction: self.prediction.get(),
            interpretation: self.interpretation.get(),
            similarity: self.similarity.get(),
        }
    }
}
