use locator_model::dom::snapshot::ElementSnapshot;
use locator_model::{
    CreateModelRequest, Document, LocatorStrategy, Model, ModelBuilder, Profile, ProfileRegistry,
};

pub fn el(tag: &str) -> ElementSnapshot {
    ElementSnapshot::new(tag)
}

/// `<html><body>{children}</body></html>`
pub fn page(children: Vec<ElementSnapshot>) -> Document {
    let body = children.into_iter().fold(el("body"), |body, c| body.child(c));
    Document::from_element(el("html").child(body))
}

/// Built-in profiles plus a `test` profile allowing exactly `strategies`.
pub fn registry_with(strategies: &[LocatorStrategy]) -> ProfileRegistry {
    let mut registry = ProfileRegistry::builtin();
    registry.register(Profile::new("test", strategies));
    registry
}

pub fn scan(doc: &Document, registry: &ProfileRegistry, profile: &str) -> Option<Model> {
    ModelBuilder::new(registry)
        .create_model(doc, CreateModelRequest::fresh(doc.root(), profile))
        .unwrap()
}

pub fn names(model: &Model) -> Vec<&str> {
    model.entities.iter().map(|e| e.name.as_str()).collect()
}

pub fn temp_path(file: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("locator_model_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(file);
    let _ = std::fs::remove_file(&path);
    path
}
