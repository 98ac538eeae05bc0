pub mod document;
pub mod query;
pub mod snapshot;
pub mod walker;
