// ── Domain model ──
//
// The wire types from klima-api are the domain types — the client keeps a
// verbatim mirror of the server's records, never a locally-mutated copy.
// This module adds the client-owned filter state on top.

mod filter;

pub use filter::FilterState;
pub use klima_api::types::{
    Conditioner, ConditionerDraft, ConditionerType, LookupBundle, Manufacturer, Status,
};
