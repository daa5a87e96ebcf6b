// ── Mutation coordination ──
//
// One state machine, three operations: saving on, API call, then either
// success toast + awaited list refresh + result, or error toast + re-raised
// failure so the calling view can react (e.g. keep a confirm dialog open).
// Saving goes off on both paths. No optimistic local mutation and no
// automatic retry.

use tracing::info;

use klima_api::types::{Conditioner, ConditionerDraft};

use super::Console;
use crate::error::CoreError;

impl Console {
    /// Create a conditioner, then refresh the list from the server.
    ///
    /// The returned record is the server's (with its assigned id); the
    /// store is updated by the refetch, never by appending locally.
    pub async fn create(&self, draft: &ConditionerDraft) -> Result<Conditioner, CoreError> {
        self.set_saving(true);

        let outcome = match self.api().create_conditioner(draft).await {
            Ok(created) => {
                info!(id = created.id, "conditioner created");
                self.notifier().success("Conditioner created successfully");
                self.refetch().await;
                Ok(created)
            }
            Err(err) => {
                let err = CoreError::from(err);
                self.notifier().error(err.user_message());
                Err(err)
            }
        };

        self.set_saving(false);
        outcome
    }

    /// Replace a conditioner wholesale, then refresh the list.
    pub async fn update(
        &self,
        id: i64,
        draft: &ConditionerDraft,
    ) -> Result<Conditioner, CoreError> {
        self.set_saving(true);

        let outcome = match self.api().update_conditioner(id, draft).await {
            Ok(updated) => {
                info!(id, "conditioner updated");
                self.notifier().success("Conditioner updated successfully");
                self.refetch().await;
                Ok(updated)
            }
            Err(err) => {
                let err = CoreError::from(err);
                self.notifier().error(err.user_message());
                Err(err)
            }
        };

        self.set_saving(false);
        outcome
    }

    /// Delete a conditioner, then refresh the list.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.set_saving(true);

        let outcome = match self.api().delete_conditioner(id).await {
            Ok(()) => {
                info!(id, "conditioner deleted");
                self.notifier().success("Conditioner deleted successfully");
                self.refetch().await;
                Ok(())
            }
            Err(err) => {
                let err = CoreError::from(err);
                self.notifier().error(err.user_message());
                Err(err)
            }
        };

        self.set_saving(false);
        outcome
    }
}
