// ── List-fetch coordination ──
//
// Every fetch follows the same bracket: loading on, error cleared, fetch,
// store-or-record, loading off on every path. Failures land in the store's
// `error` field (shown inline) plus a toast; they are not returned.
//
// Overlapping fetches are not de-duplicated: both proceed and the store
// keeps whichever response lands last. Accepted limitation, see DESIGN.md.

use tracing::{debug, warn};

use klima_api::types::Conditioner;

use super::Console;
use crate::error::CoreError;

impl Console {
    /// Load the conditioner list once per session.
    ///
    /// A no-op whenever the store already holds data; call
    /// [`refetch`](Self::refetch) to force a refresh.
    pub async fn ensure_loaded(&self) {
        if self.store().has_conditioners() {
            return;
        }
        self.refetch().await;
    }

    /// Unconditionally re-fetch the list and replace the store wholesale.
    ///
    /// Used after every successful mutation — the in-memory list is always
    /// a verbatim mirror of the last successful fetch, never a locally
    /// patched copy.
    pub async fn refetch(&self) {
        let store = self.store();
        store.set_loading(true);
        store.set_error(None);

        match self.api().list_conditioners().await {
            Ok(list) => {
                debug!(count = list.len(), "conditioner list refreshed");
                store.set_conditioners(list);
            }
            Err(err) => {
                warn!(error = %err, "conditioner list fetch failed");
                let message = err.user_message();
                store.set_error(Some(message.clone()));
                self.notifier().error(message);
            }
        }

        store.set_loading(false);
    }

    /// Load the lookup bundle once per session, keyed on statuses.
    pub async fn ensure_lookups_loaded(&self) {
        if self.store().has_lookups() {
            return;
        }
        self.refetch_lookups().await;
    }

    /// Unconditionally re-fetch the reference collections.
    ///
    /// The bundle fetch is all-or-nothing; a failure stores an error and
    /// leaves the previous bundle in place.
    pub async fn refetch_lookups(&self) {
        let store = self.store();
        store.set_loading(true);
        store.set_error(None);

        match self.api().fetch_lookups().await {
            Ok(bundle) => {
                debug!(
                    statuses = bundle.statuses.len(),
                    types = bundle.types.len(),
                    manufacturers = bundle.manufacturers.len(),
                    "lookups refreshed"
                );
                store.set_lookups(bundle);
            }
            Err(err) => {
                warn!(error = %err, "lookup fetch failed");
                store.set_error(Some(err.user_message()));
                self.notifier().error("Failed to load reference data");
            }
        }

        store.set_loading(false);
    }

    /// Fetch a single conditioner directly from the server.
    ///
    /// Detail views use this; it bypasses the shared store on purpose (the
    /// list remains whatever the last list fetch produced).
    pub async fn fetch_one(&self, id: i64) -> Result<Conditioner, CoreError> {
        Ok(self.api().get_conditioner(id).await?)
    }
}
