// ── Filter predicate over the conditioner collection ──
//
// Owned by the store, independent of the entity list: filters may be set
// before any data has loaded and survive navigation between views.

use super::Conditioner;

/// Client-held predicate configuration narrowing the displayed list.
///
/// All active clauses are AND-ed; an empty filter passes everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring match over name, model, and serial
    /// number. Inactive when empty.
    pub search: String,
    /// Exact status match. Inactive when `None`.
    pub status_id: Option<i64>,
    /// Exact type match. Inactive when `None`.
    pub type_id: Option<i64>,
    /// Exact manufacturer match. Inactive when `None`.
    pub manufacturer_id: Option<i64>,
}

impl FilterState {
    /// `true` when no clause is active.
    pub fn is_clear(&self) -> bool {
        self.search.is_empty()
            && self.status_id.is_none()
            && self.type_id.is_none()
            && self.manufacturer_id.is_none()
    }

    /// Apply every active clause to one conditioner.
    ///
    /// A record missing a searched field fails the search on that field
    /// only; a record missing a foreign key fails any id clause on it.
    pub fn matches(&self, conditioner: &Conditioner) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = [
                &conditioner.name,
                &conditioner.model,
                &conditioner.serial_number,
            ]
            .into_iter()
            .any(|field| {
                field
                    .as_deref()
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            });
            if !hit {
                return false;
            }
        }

        if let Some(id) = self.status_id {
            if conditioner.status_id != Some(id) {
                return false;
            }
        }

        if let Some(id) = self.type_id {
            if conditioner.type_id != Some(id) {
                return false;
            }
        }

        if let Some(id) = self.manufacturer_id {
            if conditioner.manufacturer_id != Some(id) {
                return false;
            }
        }

        true
    }
}
