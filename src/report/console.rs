use crate::model::entity_model::{Entity, Model};
use crate::profile::profile_model::{LocatorStrategy, Profile};

// ============================================================================
// Console reporter: terminal output for models and profiles
// ============================================================================

/// Format a model for terminal output.
///
/// Produces output like:
/// ```text
/// === Model: 2 entities ===
///
/// EmailAddress  INPUT (email)
///     * id               email
///       name             email
/// Save  BUTTON (button)
///     * tagIndex         BUTTON0
///
/// === 2 entities, 1 on fallback locator ===
/// ```
pub fn format_console_report(model: &Model) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Model: {} entities ===\n\n", model.len()));

    for entity in &model.entities {
        out.push_str(&format_entity(entity));
    }

    let on_fallback = model
        .entities
        .iter()
        .filter(|e| e.selected_locator().map(|l| l.strategy) == Some(LocatorStrategy::TagIndex))
        .count();

    out.push_str(&format!(
        "\n=== {} entities, {} on fallback locator ===\n",
        model.len(),
        on_fallback
    ));

    out
}

fn format_entity(entity: &Entity) -> String {
    let mut out = format!(
        "{}  {} ({})\n",
        entity.name, entity.tag_name, entity.element_type
    );

    // Hidden locators only show up once they are what the entity relies on
    for locator in entity.locators.iter().filter(|l| !l.hidden || l.selected) {
        let marker = if locator.selected { "*" } else { " " };
        let value = if locator.is_usable() {
            locator.locator.as_str()
        } else {
            "-"
        };
        out.push_str(&format!(
            "    {} {:<16} {}\n",
            marker,
            locator.strategy.as_str(),
            value
        ));
    }

    out
}

/// One line per profile: `name: strategy, strategy, ...`
pub fn format_profiles<'a>(profiles: impl Iterator<Item = &'a Profile>) -> String {
    let mut out = String::new();
    for profile in profiles {
        let strategies: Vec<&str> = profile.locators.iter().map(|s| s.as_str()).collect();
        out.push_str(&format!("{}: {}\n", profile.name, strategies.join(", ")));
    }
    out
}
