use crate::dom::document::NodeId;
use crate::dom::query::DomQuery;
use crate::dom::walker::{TreeWalker, WalkFilter};
use crate::error::BuildError;
use crate::model::entity_model::{Entity, Model};
use crate::model::locators::build_locators;
use crate::model::naming::generate_name;
use crate::profile::profile_model::Profile;
use crate::profile::registry::ProfileRegistry;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::{BuildEvent, BuildMode};

/// Tags a test script would act on.
pub const INTERACTIVE_TAGS: [&str; 5] = ["A", "BUTTON", "INPUT", "SELECT", "TEXTAREA"];

pub struct CreateModelRequest<'a> {
    pub element: NodeId,
    pub active_profile: &'a str,
    /// When set, `element` is appended to this model instead of scanned.
    pub existing_model: Option<Model>,
}

impl<'a> CreateModelRequest<'a> {
    pub fn fresh(element: NodeId, active_profile: &'a str) -> Self {
        Self {
            element,
            active_profile,
            existing_model: None,
        }
    }

    pub fn append(element: NodeId, active_profile: &'a str, existing_model: Model) -> Self {
        Self {
            element,
            active_profile,
            existing_model: Some(existing_model),
        }
    }
}

/// Turns a region of a document into a [`Model`] of interactive entities.
pub struct ModelBuilder<'r> {
    registry: &'r ProfileRegistry,
    tracer: Option<&'r TraceLogger>,
}

impl<'r> ModelBuilder<'r> {
    pub fn new(registry: &'r ProfileRegistry) -> Self {
        Self {
            registry,
            tracer: None,
        }
    }

    pub fn with_tracer(mut self, tracer: &'r TraceLogger) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Scan the descendants of `request.element` into a new model, or, when
    /// an existing model is supplied, append `request.element` itself to it.
    ///
    /// A fresh scan that finds nothing interactive returns `Ok(None)`. An
    /// incremental append always returns the extended model; the element is
    /// trusted as-is, with no visibility or tag filtering.
    pub fn create_model<D: DomQuery + ?Sized>(
        &self,
        dom: &D,
        request: CreateModelRequest<'_>,
    ) -> Result<Option<Model>, BuildError> {
        let CreateModelRequest {
            element,
            active_profile,
            existing_model,
        } = request;

        let profile = self.registry.lookup(active_profile)?;
        if !dom.contains(element) {
            return Err(BuildError::UnknownNode(element));
        }

        match existing_model {
            Some(mut model) => {
                self.trace(|| BuildEvent::model_started(BuildMode::Incremental, &profile.name));
                let entity = self.create_entity(dom, element, profile, &mut model);
                model.entities.push(entity);
                self.trace(|| BuildEvent::model_finished(BuildMode::Incremental, model.len()));
                Ok(Some(model))
            }
            None => {
                self.trace(|| BuildEvent::model_started(BuildMode::Fresh, &profile.name));
                let model = self.scan(dom, element, profile);
                self.trace(|| BuildEvent::model_finished(BuildMode::Fresh, model.len()));
                Ok(if model.is_empty() { None } else { Some(model) })
            }
        }
    }

    fn scan<D: DomQuery + ?Sized>(&self, dom: &D, root: NodeId, profile: &Profile) -> Model {
        let mut model = Model::new();

        let walker = TreeWalker::new(dom, root, |node| {
            if dom.is_visible(node) {
                WalkFilter::Accept
            } else {
                self.trace(|| BuildEvent::subtree_pruned(&dom.tag_name(node), &dom.xpath(node)));
                WalkFilter::Reject
            }
        });

        for node in walker {
            if INTERACTIVE_TAGS.contains(&dom.tag_name(node).as_str()) {
                let entity = self.create_entity(dom, node, profile, &mut model);
                model.entities.push(entity);
            }
        }

        model
    }

    fn create_entity<D: DomQuery + ?Sized>(
        &self,
        dom: &D,
        node: NodeId,
        profile: &Profile,
        model: &mut Model,
    ) -> Entity {
        let entity = Entity {
            name: generate_name(dom, node, &mut model.used_names),
            locators: build_locators(dom, node, profile),
            tag_name: dom.tag_name(node),
            element_type: dom.element_type(node),
        };

        self.trace(|| {
            BuildEvent::entity_added(
                &entity.name,
                &entity.tag_name,
                entity.selected_locator().map(|l| l.strategy),
            )
        });
        entity
    }

    fn trace(&self, event: impl FnOnce() -> BuildEvent) {
        if let Some(tracer) = self.tracer.filter(|t| t.is_enabled()) {
            tracer.log(&event());
        }
    }
}
