// ── Shared reactive store ──

mod data_store;

pub use data_store::ConditionerStore;
