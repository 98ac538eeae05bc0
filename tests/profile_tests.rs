use locator_model::{BuildError, LocatorStrategy, Profile, ProfileRegistry};

use crate::common::utils::temp_path;

mod common;

#[test]
fn builtin_profiles_are_registered_in_order() {
    let registry = ProfileRegistry::builtin();
    assert_eq!(registry.names(), vec!["selenium", "css", "xpath", "minimal"]);

    let selenium = registry.lookup("selenium").unwrap();
    assert_eq!(selenium.locators.len(), 8);
    assert!(
        !selenium.allows(LocatorStrategy::TagIndex),
        "tagIndex is kept by its own flag, not by profiles"
    );
}

#[test]
fn lookup_miss_lists_known_profiles() {
    let registry = ProfileRegistry::builtin();
    let err = registry.lookup("nope").unwrap_err();

    assert!(matches!(err, BuildError::UnknownProfile { .. }));
    assert_eq!(
        err.to_string(),
        "Unknown profile 'nope' (known: selenium, css, xpath, minimal)"
    );
}

#[test]
fn register_replaces_same_name() {
    let mut registry = ProfileRegistry::builtin();
    registry.register(Profile::new("css", &[LocatorStrategy::Css]));

    assert_eq!(registry.names().len(), 4, "No duplicate entry");
    let css = registry.lookup("css").unwrap();
    assert!(!css.allows(LocatorStrategy::Id));
}

#[test]
fn yaml_profiles_extend_the_registry() {
    let yaml = r#"
profiles:
  - name: playwright
    locators: [css, xpath, linkText]
  - name: minimal
    locators: [name]
"#;
    let mut registry = ProfileRegistry::builtin();
    registry.extend_from_yaml_str(yaml).unwrap();

    let playwright = registry.lookup("playwright").unwrap();
    assert!(playwright.allows(LocatorStrategy::LinkText));
    assert!(playwright.allows(LocatorStrategy::Css));
    assert!(!playwright.allows(LocatorStrategy::Id));

    let minimal = registry.lookup("minimal").unwrap();
    assert_eq!(minimal.locators.len(), 1, "Overridden by the file");
}

#[test]
fn yaml_with_unknown_strategy_is_rejected() {
    let yaml = "profiles:\n  - name: bad\n    locators: [id, shadowRoot]\n";
    let err = ProfileRegistry::empty().extend_from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, BuildError::ProfileParse { .. }), "got {:?}", err);
}

#[test]
fn profiles_file_is_read_from_disk() {
    let path = temp_path("profiles.yaml");
    std::fs::write(&path, "profiles:\n  - name: ids\n    locators: [id]\n").unwrap();

    let mut registry = ProfileRegistry::empty();
    registry.extend_from_file(&path).unwrap();
    assert_eq!(registry.names(), vec!["ids"]);

    let err = registry.extend_from_file(temp_path("absent.yaml")).unwrap_err();
    assert!(matches!(err, BuildError::ProfileRead { .. }));
}

#[test]
fn strategy_names_round_trip_through_from_str() {
    for strategy in LocatorStrategy::ALL {
        assert_eq!(strategy.as_str().parse::<LocatorStrategy>(), Ok(strategy));
    }
    assert!("ID".parse::<LocatorStrategy>().is_err(), "Names are case-sensitive");
    assert_eq!(LocatorStrategy::PartialLinkText.to_string(), "partialLinkText");
}
