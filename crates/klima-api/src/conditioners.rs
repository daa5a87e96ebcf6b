// Conditioner collection endpoints.
//
// Standard REST semantics over /conditioners: no pagination, no server-side
// filtering — the list endpoint returns the full collection in server order.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Conditioner, ConditionerDraft};

impl ApiClient {
    /// List every conditioner, in the server's ordering.
    ///
    /// `GET /conditioners`
    pub async fn list_conditioners(&self) -> Result<Vec<Conditioner>, Error> {
        debug!("listing conditioners");
        self.get("conditioners").await
    }

    /// Fetch a single conditioner by id.
    ///
    /// `GET /conditioners/{id}` — a missing id surfaces as a normalized
    /// 404 server error.
    pub async fn get_conditioner(&self, id: i64) -> Result<Conditioner, Error> {
        self.get(&format!("conditioners/{id}")).await
    }

    /// Create a conditioner. The server assigns the id and timestamps.
    ///
    /// `POST /conditioners`
    pub async fn create_conditioner(
        &self,
        draft: &ConditionerDraft,
    ) -> Result<Conditioner, Error> {
        debug!(name = %draft.name, "creating conditioner");
        self.post("conditioners", draft).await
    }

    /// Replace a conditioner wholesale. Partial updates are not supported;
    /// the draft must carry every field.
    ///
    /// `PUT /conditioners/{id}`
    pub async fn update_conditioner(
        &self,
        id: i64,
        draft: &ConditionerDraft,
    ) -> Result<Conditioner, Error> {
        debug!(id, "updating conditioner");
        self.put(&format!("conditioners/{id}"), draft).await
    }

    /// Delete a conditioner.
    ///
    /// `DELETE /conditioners/{id}` — empty response body on success.
    pub async fn delete_conditioner(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting conditioner");
        self.delete(&format!("conditioners/{id}")).await
    }
}
