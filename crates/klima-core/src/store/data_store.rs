// ── Central reactive data store ──
//
// Sole owner of the conditioner collection, the lookup bundle, the filter
// state, and the shared request-lifecycle flags. Every piece of state lives
// in a `watch` channel: writers replace wholesale (last write wins) and
// consumers either read a snapshot or subscribe for changes.

use std::sync::Arc;

use tokio::sync::watch;

use crate::model::{Conditioner, FilterState, LookupBundle, Manufacturer};

/// Shared store for one admin session.
///
/// Consumers hold no copies of their own — they read snapshots through the
/// accessors here and issue commands back through the setters (or through
/// the [`Console`](crate::Console) coordinators, which call the setters).
pub struct ConditionerStore {
    conditioners: watch::Sender<Arc<Vec<Conditioner>>>,
    lookups: watch::Sender<Arc<LookupBundle>>,
    filters: watch::Sender<FilterState>,
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
}

impl ConditionerStore {
    pub fn new() -> Self {
        let (conditioners, _) = watch::channel(Arc::new(Vec::new()));
        let (lookups, _) = watch::channel(Arc::new(LookupBundle::default()));
        let (filters, _) = watch::channel(FilterState::default());
        let (loading, _) = watch::channel(false);
        let (error, _) = watch::channel(None);

        Self {
            conditioners,
            lookups,
            filters,
            loading,
            error,
        }
    }

    // ── Setters ──────────────────────────────────────────────────────

    /// Replace the entity collection wholesale. No merging, no diffing —
    /// the list is a verbatim mirror of the last successful fetch.
    pub fn set_conditioners(&self, list: Vec<Conditioner>) {
        self.conditioners.send_replace(Arc::new(list));
    }

    /// Replace the lookup bundle wholesale.
    pub fn set_lookups(&self, bundle: LookupBundle) {
        self.lookups.send_replace(Arc::new(bundle));
    }

    /// Shallow-merge filter changes: the closure mutates only the fields
    /// it cares about, everything else keeps its previous value.
    pub fn update_filters(&self, apply: impl FnOnce(&mut FilterState)) {
        self.filters.send_modify(apply);
    }

    /// Restore the default all-empty filter state.
    pub fn reset_filters(&self) {
        self.filters.send_replace(FilterState::default());
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.send_replace(loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.error.send_replace(error);
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    /// The full, unfiltered collection (cheap `Arc` clone).
    pub fn conditioners(&self) -> Arc<Vec<Conditioner>> {
        self.conditioners.borrow().clone()
    }

    /// The filtered view, recomputed on every read.
    ///
    /// A pure function of `(conditioners, filters)`: same inputs, same
    /// ordered output. Source order is preserved and the underlying
    /// collection is never mutated.
    pub fn filtered(&self) -> Vec<Conditioner> {
        let filters = self.filters.borrow().clone();
        let snapshot = self.conditioners();

        snapshot
            .iter()
            .filter(|c| filters.matches(c))
            .cloned()
            .collect()
    }

    pub fn lookups(&self) -> Arc<LookupBundle> {
        self.lookups.borrow().clone()
    }

    pub fn filters(&self) -> FilterState {
        self.filters.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// `true` once a conditioner list has been stored (keys the
    /// fetch-once-per-session behavior of `ensure_loaded`).
    pub fn has_conditioners(&self) -> bool {
        !self.conditioners.borrow().is_empty()
    }

    /// `true` once lookups have been stored, keyed on statuses.
    pub fn has_lookups(&self) -> bool {
        !self.lookups.borrow().statuses.is_empty()
    }

    // ── Lookup resolution ────────────────────────────────────────────

    /// Resolve a status id to its display name; `"Unknown"` when the id
    /// has no row, including before lookups have loaded. Never fails.
    pub fn status_name(&self, id: Option<i64>) -> String {
        resolve_name(id, self.lookups.borrow().statuses.iter().map(|s| (s.id, &s.name)))
    }

    /// Resolve a type id to its display name; `"Unknown"` on any miss.
    pub fn type_name(&self, id: Option<i64>) -> String {
        resolve_name(id, self.lookups.borrow().types.iter().map(|t| (t.id, &t.name)))
    }

    /// Resolve a manufacturer id to the full record. Manufacturers carry
    /// several display fields, so callers handle the missing case
    /// themselves instead of getting a placeholder string.
    pub fn manufacturer(&self, id: Option<i64>) -> Option<Manufacturer> {
        let id = id?;
        self.lookups
            .borrow()
            .manufacturers
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_conditioners(&self) -> watch::Receiver<Arc<Vec<Conditioner>>> {
        self.conditioners.subscribe()
    }

    pub fn subscribe_lookups(&self) -> watch::Receiver<Arc<LookupBundle>> {
        self.lookups.subscribe()
    }

    pub fn subscribe_filters(&self) -> watch::Receiver<FilterState> {
        self.filters.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn subscribe_error(&self) -> watch::Receiver<Option<String>> {
        self.error.subscribe()
    }
}

impl Default for ConditionerStore {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_name<'a>(
    id: Option<i64>,
    mut rows: impl Iterator<Item = (i64, &'a String)>,
) -> String {
    id.and_then(|id| rows.find(|(row_id, _)| *row_id == id))
        .map_or_else(|| "Unknown".to_owned(), |(_, name)| name.clone())
}
