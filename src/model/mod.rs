pub mod builder;
pub mod entity_model;
pub mod locators;
pub mod naming;
