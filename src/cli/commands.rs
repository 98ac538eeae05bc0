use crate::dom::document::Document;
use crate::error::BuildError;
use crate::model::builder::{CreateModelRequest, ModelBuilder};
use crate::model::entity_model::Model;
use crate::profile::registry::ProfileRegistry;
use crate::report::console::{format_console_report, format_profiles};

// ============================================================================
// shared setup
// ============================================================================

/// Built-in profiles, extended (and possibly overridden) by a YAML file.
pub fn build_registry(profiles_file: Option<&str>) -> Result<ProfileRegistry, BuildError> {
    let mut registry = ProfileRegistry::builtin();
    if let Some(path) = profiles_file {
        registry.extend_from_file(path)?;
    }
    Ok(registry)
}

// ============================================================================
// scan subcommand
// ============================================================================

/// Fresh scan beneath `root_id` (or the document root), then one
/// incremental append per `append_ids` entry.
///
/// Returns `Ok(None)` only when the scan found nothing and nothing was
/// appended.
pub fn scan_document(
    builder: &ModelBuilder<'_>,
    doc: &Document,
    profile: &str,
    root_id: Option<&str>,
    append_ids: &[String],
) -> Result<Option<Model>, BuildError> {
    let root = match root_id {
        Some(id) => doc
            .find_by_id(id)
            .ok_or_else(|| BuildError::ElementNotFound { id: id.to_string() })?,
        None => doc.root(),
    };

    let mut model = builder.create_model(doc, CreateModelRequest::fresh(root, profile))?;

    for id in append_ids {
        let node = doc
            .find_by_id(id)
            .ok_or_else(|| BuildError::ElementNotFound { id: id.clone() })?;
        let existing = model.take().unwrap_or_default();
        model = builder.create_model(doc, CreateModelRequest::append(node, profile, existing))?;
    }

    Ok(model)
}

/// Run a scan and print the report. Returns whether anything was found.
pub fn cmd_scan(
    builder: &ModelBuilder<'_>,
    snapshot: &str,
    profile: &str,
    root_id: Option<&str>,
    append_ids: &[String],
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let doc = Document::load(snapshot)?;

    if verbose > 0 {
        eprintln!(
            "Scanning {} ({} elements, profile={})...",
            snapshot,
            doc.len(),
            profile
        );
    }

    match scan_document(builder, &doc, profile, root_id, append_ids)? {
        Some(model) => {
            print!("{}", format_console_report(&model));
            Ok(true)
        }
        None => {
            eprintln!("No interactive elements found in: {}", snapshot);
            Ok(false)
        }
    }
}

// ============================================================================
// profiles subcommand
// ============================================================================

pub fn cmd_profiles(registry: &ProfileRegistry) {
    print!("{}", format_profiles(registry.iter()));
}
