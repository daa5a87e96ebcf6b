// Reference-data endpoints: statuses, types, manufacturers.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{ConditionerType, LookupBundle, Manufacturer, Status};

impl ApiClient {
    /// `GET /conditioner-statuses`
    pub async fn list_statuses(&self) -> Result<Vec<Status>, Error> {
        self.get("conditioner-statuses").await
    }

    /// `GET /conditioner-types`
    pub async fn list_types(&self) -> Result<Vec<ConditionerType>, Error> {
        self.get("conditioner-types").await
    }

    /// `GET /manufacturers`
    pub async fn list_manufacturers(&self) -> Result<Vec<Manufacturer>, Error> {
        self.get("manufacturers").await
    }

    /// Fetch all three reference collections concurrently.
    ///
    /// Fail-fast: the first failing fetch fails the whole bundle and any
    /// partial results are discarded. A half-populated lookup table would
    /// silently resolve foreign keys to "Unknown", which is worse than an
    /// explicit all-or-nothing error.
    pub async fn fetch_lookups(&self) -> Result<LookupBundle, Error> {
        debug!("fetching lookup bundle");
        let (statuses, types, manufacturers) = tokio::try_join!(
            self.list_statuses(),
            self.list_types(),
            self.list_manufacturers(),
        )?;

        Ok(LookupBundle {
            statuses,
            types,
            manufacturers,
        })
    }
}
