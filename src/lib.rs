pub mod cli;
pub mod dom;
pub mod error;
pub mod model;
pub mod profile;
pub mod report;
pub mod trace;

pub use dom::document::{Document, NodeId};
pub use dom::query::{DomQuery, ElementType};
pub use error::BuildError;
pub use model::builder::{CreateModelRequest, ModelBuilder};
pub use model::entity_model::{Entity, Locator, Model};
pub use profile::profile_model::{LocatorStrategy, Profile};
pub use profile::registry::ProfileRegistry;
