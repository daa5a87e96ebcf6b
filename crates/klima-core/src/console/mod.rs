// ── Console: the per-session context object ──
//
// Created once at application start and handed to every consumer by
// reference. Carries the API gateway, the shared store, and the notifier;
// the fetch and mutation coordinators are implemented as inherent methods
// in sibling files.

mod fetch;
mod mutations;

use std::sync::Arc;

use tokio::sync::watch;

use klima_api::ApiClient;

use crate::config::ConsoleConfig;
use crate::error::CoreError;
use crate::notify::Notifier;
use crate::store::ConditionerStore;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc`. Owns the session's [`ConditionerStore`]
/// and [`Notifier`]; all fetches and mutations go through the coordinator
/// methods so loading/error bracketing stays consistent.
#[derive(Clone)]
pub struct Console {
    inner: Arc<ConsoleInner>,
}

struct ConsoleInner {
    api: ApiClient,
    store: ConditionerStore,
    notifier: Notifier,
    /// Mutation-in-flight flag, deliberately separate from the store's
    /// list-fetch `loading` flag.
    saving: watch::Sender<bool>,
}

impl Console {
    /// Build a console session from configuration.
    pub fn new(config: ConsoleConfig) -> Result<Self, CoreError> {
        let api = ApiClient::new(config.base_url, config.timeout).map_err(|e| {
            CoreError::Config {
                message: format!("failed to build HTTP client: {e}"),
            }
        })?;

        Ok(Self::with_api(api))
    }

    /// Wrap an existing gateway (used by tests with a mock server).
    pub fn with_api(api: ApiClient) -> Self {
        let (saving, _) = watch::channel(false);

        Self {
            inner: Arc::new(ConsoleInner {
                api,
                store: ConditionerStore::new(),
                notifier: Notifier::new(),
                saving,
            }),
        }
    }

    /// The session's shared store.
    pub fn store(&self) -> &ConditionerStore {
        &self.inner.store
    }

    /// The session's notification fan-out.
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    /// `true` while a mutation is in flight.
    pub fn saving(&self) -> bool {
        *self.inner.saving.borrow()
    }

    /// Subscribe to the mutation-in-flight flag.
    pub fn subscribe_saving(&self) -> watch::Receiver<bool> {
        self.inner.saving.subscribe()
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    pub(crate) fn set_saving(&self, saving: bool) {
        self.inner.saving.send_replace(saving);
    }
}
