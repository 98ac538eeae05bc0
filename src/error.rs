use std::fmt;

use crate::dom::document::NodeId;

#[derive(Debug)]
pub enum BuildError {
    /// Active profile name has no entry in the registry
    UnknownProfile { name: String, known: Vec<String> },

    /// Node id does not belong to the document being modelled
    UnknownNode(NodeId),

    /// No element carries the requested `id` attribute
    ElementNotFound { id: String },

    /// Snapshot file could not be read
    SnapshotRead { path: String, source: std::io::Error },

    /// Snapshot JSON did not match the expected element shape
    SnapshotParse { context: String, source: serde_json::Error },

    /// Snapshot parsed but is structurally unusable (e.g. text root)
    DomStructure(String),

    /// Profile definitions file could not be read
    ProfileRead { path: String, source: std::io::Error },

    /// Profile definitions YAML is malformed
    ProfileParse { context: String, source: serde_yaml::Error },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::UnknownProfile { name, known } => {
                write!(f, "Unknown profile '{}' (known: {})", name, known.join(", "))
            }
            BuildError::UnknownNode(id) => {
                write!(f, "Node {} is not part of this document", id.0)
            }
            BuildError::ElementNotFound { id } => {
                write!(f, "No element with id '{}'", id)
            }
            BuildError::SnapshotRead { path, source } => {
                write!(f, "Failed to read snapshot '{}': {}", path, source)
            }
            BuildError::SnapshotParse { context, source } => {
                write!(f, "Snapshot parse error ({}): {}", context, source)
            }
            BuildError::DomStructure(msg) => {
                write!(f, "Unexpected DOM structure: {}", msg)
            }
            BuildError::ProfileRead { path, source } => {
                write!(f, "Failed to read profiles '{}': {}", path, source)
            }
            BuildError::ProfileParse { context, source } => {
                write!(f, "Profile parse error ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::SnapshotRead { source, .. } => Some(source),
            BuildError::SnapshotParse { source, .. } => Some(source),
            BuildError::ProfileRead { source, .. } => Some(source),
            BuildError::ProfileParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
