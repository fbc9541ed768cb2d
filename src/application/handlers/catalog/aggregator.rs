//! CatalogAggregator - Loads and joins the remote catalog.
//!
//! Issues the three catalog fetches concurrently, joins menu items to vendors
//! once all of them have resolved, and publishes the outcome as a
//! [`CatalogSnapshot`] on a watch channel. Failures never escape: they land in
//! the `Error` phase with an empty item list.
//!
//! Loads may overlap. Each load takes a sequence number; a result is dropped
//! if a newer load has already been applied.

use std::sync::{Arc, Mutex, PoisonError};

use futures::future;
use tokio::sync::watch;

use crate::domain::catalog::{
    join_catalog, Building, CatalogFilter, CatalogSnapshot, LoadPhase, OrderableItem, VendorMatch,
};
use crate::domain::foundation::StateMachine;
use crate::ports::{CatalogSource, TransportError};

#[derive(Debug, Default)]
struct LoadSequence {
    issued: u64,
    applied: u64,
}

/// Aggregates the remote catalog into orderable items.
pub struct CatalogAggregator {
    source: Arc<dyn CatalogSource>,
    matching: VendorMatch,
    sequence: Mutex<LoadSequence>,
    state: watch::Sender<CatalogSnapshot>,
}

impl CatalogAggregator {
    pub fn new(source: Arc<dyn CatalogSource>, matching: VendorMatch) -> Self {
        let (state, _) = watch::channel(CatalogSnapshot::default());
        Self {
            source,
            matching,
            sequence: Mutex::new(LoadSequence::default()),
            state,
        }
    }

    /// Observe every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.state.subscribe()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    /// Joined items of the current snapshot passing `filter`.
    pub fn items(&self, filter: &CatalogFilter) -> Vec<OrderableItem> {
        filter.apply(&self.state.borrow().items, self.matching)
    }

    /// Buildings of the current snapshot.
    pub fn buildings(&self) -> Arc<Vec<Building>> {
        Arc::clone(&self.state.borrow().buildings)
    }

    /// Loads the catalog and returns the snapshot current after this load.
    ///
    /// If a newer load finished first, this load's result is discarded and
    /// the newer snapshot is returned.
    pub async fn load(&self) -> CatalogSnapshot {
        let seq = self.begin_load();
        tracing::debug!(seq, "Catalog load started");

        let (menu_items, vendors, buildings) = future::join3(
            self.source.list_menu_items(),
            self.source.list_vendors(),
            self.source.list_buildings(),
        )
        .await;

        let outcome = match (menu_items, vendors, buildings) {
            (Ok(menu_items), Ok(vendors), Ok(buildings)) => {
                let items = join_catalog(&menu_items, &vendors, self.matching);
                let unmatched = items.iter().filter(|i| i.has_unknown_vendor()).count();
                tracing::info!(
                    seq,
                    items = items.len(),
                    vendors = vendors.len(),
                    buildings = buildings.len(),
                    unmatched,
                    "Catalog loaded"
                );
                CatalogSnapshot::loaded(items, buildings)
            }
            (menu_items, vendors, buildings) => {
                let reason = describe_failure(&[
                    ("menu items", menu_items.err()),
                    ("vendors", vendors.err()),
                    ("buildings", buildings.err()),
                ]);
                tracing::warn!(seq, %reason, "Catalog load failed");
                CatalogSnapshot::failed(reason)
            }
        };

        self.finish_load(seq, outcome)
    }

    fn lock_sequence(&self) -> std::sync::MutexGuard<'_, LoadSequence> {
        self.sequence.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin_load(&self) -> u64 {
        let mut sequence = self.lock_sequence();
        sequence.issued += 1;
        self.state.send_modify(|snapshot| {
            snapshot.phase = advance_phase(snapshot.phase, LoadPhase::Loading);
        });
        sequence.issued
    }

    fn finish_load(&self, seq: u64, mut outcome: CatalogSnapshot) -> CatalogSnapshot {
        let mut sequence = self.lock_sequence();
        if seq <= sequence.applied {
            tracing::debug!(seq, applied = sequence.applied, "Discarding stale catalog result");
            return self.snapshot();
        }
        sequence.applied = seq;

        let current = self.state.borrow().phase;
        outcome.phase = if sequence.issued > seq {
            // A newer load is still in flight and will settle the phase.
            advance_phase(current, LoadPhase::Loading)
        } else {
            advance_phase(current, outcome.phase)
        };

        self.state.send_replace(outcome.clone());
        outcome
    }
}

fn advance_phase(current: LoadPhase, target: LoadPhase) -> LoadPhase {
    current.transition_to(target).unwrap_or_else(|err| {
        tracing::warn!(%err, "Unexpected catalog phase change");
        target
    })
}

fn describe_failure(results: &[(&str, Option<TransportError>)]) -> String {
    results
        .iter()
        .filter_map(|(collection, error)| {
            error
                .as_ref()
                .map(|error| format!("{}: {}", collection, error))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
