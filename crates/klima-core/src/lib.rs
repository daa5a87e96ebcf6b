// klima-core: Shared data layer between klima-api and consumers (CLI/TUI).
//
// Owns the in-memory mirror of the server's conditioner collection, the
// filter state, and the coordinators that bracket every fetch and mutation
// with consistent loading/error handling.

pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod notify;
pub mod store;
pub mod validation;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::ConsoleConfig;
pub use console::Console;
pub use error::CoreError;
pub use notify::{Notification, NotificationKind, Notifier};
pub use store::ConditionerStore;
pub use validation::{DraftInput, FieldError};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Conditioner, ConditionerDraft, ConditionerType, FilterState, LookupBundle, Manufacturer,
    Status,
};
