// klima-api: Async Rust client for the conditioner fleet HTTP API

pub mod client;
pub mod conditioners;
pub mod error;
pub mod lookups;
pub mod types;

pub use client::ApiClient;
pub use error::Error;
pub use types::{
    Conditioner, ConditionerDraft, ConditionerType, LookupBundle, Manufacturer, Status,
};
