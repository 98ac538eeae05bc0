use std::path::Path;

use serde::Deserialize;

use crate::error::BuildError;
use crate::profile::profile_model::{LocatorStrategy, Profile};

/// Lookup table of profiles by name. Registration order is kept for listing.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<Profile>,
}

/// On-disk shape of a profile definitions file.
#[derive(Debug, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    profiles: Vec<Profile>,
}

impl ProfileRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry preloaded with the shipped profiles.
    pub fn builtin() -> Self {
        use LocatorStrategy::*;

        let mut registry = Self::empty();
        registry.register(Profile::new(
            "selenium",
            &[Id, LinkText, PartialLinkText, Name, Css, ClassName, TagName, Xpath],
        ));
        registry.register(Profile::new("css", &[Id, Css]));
        registry.register(Profile::new("xpath", &[Id, Xpath]));
        registry.register(Profile::new("minimal", &[Id, Name]));
        registry
    }

    /// Add a profile, replacing any existing one with the same name.
    pub fn register(&mut self, profile: Profile) {
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<&Profile, BuildError> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| BuildError::UnknownProfile {
                name: name.to_string(),
                known: self.names(),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    /// Merge profiles from a YAML document on top of the current set.
    pub fn extend_from_yaml_str(&mut self, yaml: &str) -> Result<(), BuildError> {
        let file: ProfilesFile =
            serde_yaml::from_str(yaml).map_err(|e| BuildError::ProfileParse {
                context: "profiles document".into(),
                source: e,
            })?;
        for profile in file.profiles {
            self.register(profile);
        }
        Ok(())
    }

    pub fn extend_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), BuildError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BuildError::ProfileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        self.extend_from_yaml_str(&content)
    }
}
