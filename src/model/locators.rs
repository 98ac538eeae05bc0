use crate::dom::document::NodeId;
use crate::dom::query::DomQuery;
use crate::model::entity_model::Locator;
use crate::profile::profile_model::{LocatorStrategy, Profile};

/// Every strategy's value for `node`, in priority order. `tagIndex` is
/// always last and starts out selected.
pub fn candidate_locators<D: DomQuery + ?Sized>(dom: &D, node: NodeId) -> Vec<Locator> {
    let tag_name = dom.tag_name(node);
    let link_text = dom.link_text(node);

    vec![
        Locator::new(LocatorStrategy::Id, dom.id(node)),
        Locator::new(LocatorStrategy::LinkText, link_text.clone()),
        Locator::new(LocatorStrategy::PartialLinkText, link_text),
        Locator::new(LocatorStrategy::Name, dom.name_attr(node)),
        Locator::new(LocatorStrategy::Css, dom.css_selector(node)),
        Locator::new(LocatorStrategy::ClassName, dom.class_name(node)),
        Locator::new(LocatorStrategy::TagName, tag_name.clone()),
        Locator::new(LocatorStrategy::Xpath, dom.xpath(node)),
        Locator::fallback(format!("{}{}", tag_name, dom.tag_index(node))),
    ]
}

/// Keep what the profile permits plus anything flagged `always`.
pub fn filter_for_profile(candidates: Vec<Locator>, profile: &Profile) -> Vec<Locator> {
    candidates
        .into_iter()
        .filter(|l| l.always || profile.allows(l.strategy))
        .collect()
}

/// Mark exactly one locator as selected: the first usable one in priority
/// order, or the `always` fallback when nothing else has a value.
pub fn select_primary(mut locators: Vec<Locator>) -> Vec<Locator> {
    locators.sort_by_key(|l| l.strategy);

    let chosen = locators
        .iter()
        .position(Locator::is_usable)
        .or_else(|| locators.iter().position(|l| l.always))
        .or_else(|| locators.len().checked_sub(1));

    for (i, locator) in locators.iter_mut().enumerate() {
        locator.selected = Some(i) == chosen;
    }
    locators
}

pub fn build_locators<D: DomQuery + ?Sized>(
    dom: &D,
    node: NodeId,
    profile: &Profile,
) -> Vec<Locator> {
    select_primary(filter_for_profile(candidate_locators(dom, node), profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(locators: &[Locator]) -> Vec<LocatorStrategy> {
        locators.iter().filter(|l| l.selected).map(|l| l.strategy).collect()
    }

    #[test]
    fn first_usable_in_priority_order_wins() {
        let locators = select_primary(vec![
            Locator::new(LocatorStrategy::Css, "#email"),
            Locator::new(LocatorStrategy::Id, "email"),
            Locator::fallback("INPUT0"),
        ]);

        assert_eq!(locators[0].strategy, LocatorStrategy::Id, "Sorted into priority order");
        assert_eq!(selected(&locators), vec![LocatorStrategy::Id]);
    }

    #[test]
    fn empty_values_fall_through_to_fallback() {
        let locators = select_primary(vec![
            Locator::new(LocatorStrategy::Id, ""),
            Locator::new(LocatorStrategy::Name, ""),
            Locator::fallback("BUTTON3"),
        ]);
        assert_eq!(selected(&locators), vec![LocatorStrategy::TagIndex]);
    }

    #[test]
    fn empty_list_selects_nothing() {
        assert!(select_primary(vec![]).is_empty());
    }

    #[test]
    fn filter_keeps_always_flagged_locators() {
        let profile = Profile::new("none", &[]);
        let kept = filter_for_profile(
            vec![
                Locator::new(LocatorStrategy::Id, "x"),
                Locator::fallback("A0"),
            ],
            &profile,
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].strategy, LocatorStrategy::TagIndex);
    }
}
