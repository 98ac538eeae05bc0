use std::collections::HashMap;

use crate::dom::document::NodeId;
use crate::dom::query::DomQuery;

pub const MAX_NAME_LENGTH: usize = 20;

const LABELABLE_TAGS: [&str; 6] = ["INPUT", "BUTTON", "SELECT", "TEXTAREA", "PROGRESS", "METER"];

/// Derive a display name for `node` and register it in `used_names`.
///
/// Sources are tried in order: associated label, button value, `name`
/// attribute, `id`, mailto local part, visible text, and finally
/// `<TAG><tagIndex>`, which is never empty.
pub fn generate_name<D: DomQuery + ?Sized>(
    dom: &D,
    node: NodeId,
    used_names: &mut HashMap<String, u32>,
) -> String {
    let tag_name = dom.tag_name(node);

    if LABELABLE_TAGS.contains(&tag_name.as_str()) {
        let label_text = dom
            .label(node)
            .map(|label| dom.text_content(label))
            .unwrap_or_default();
        if !label_text.is_empty() {
            return dedupe_name(used_names, base_name(&label_text));
        }

        let input_type = dom.input_type(node);
        if tag_name == "BUTTON" || input_type == "submit" || input_type == "reset" {
            let value = dom.value(node);
            let value = value.trim();
            if !value.is_empty() {
                return dedupe_name(used_names, base_name(value));
            }
        }
    }

    let name = dom.name_attr(node);
    if !name.is_empty() {
        return dedupe_name(used_names, base_name(&name));
    }

    let id = dom.id(node);
    if !id.is_empty() {
        return dedupe_name(used_names, base_name(&id));
    }

    if tag_name == "A" {
        if let Some(address) = dom.href(node).as_deref().and_then(|h| h.strip_prefix("mailto:")) {
            let local = address.split('@').next().unwrap_or_default();
            return dedupe_name(used_names, base_name(&format!("{}EmailLink", local)));
        }
    }

    let text = dom.text_content(node);
    if !text.is_empty() {
        let mut base = base_name(&text);
        if base.starts_with(|c: char| c.is_ascii_digit()) {
            base = truncate(&format!("{}{}", tag_name, base));
        }
        return dedupe_name(used_names, base);
    }

    let fallback = format!("{}{}", tag_name, dom.tag_index(node));
    dedupe_name(used_names, base_name(&fallback))
}

/// Camel-case, capitalize, truncate. Does not touch the registry.
pub fn base_name(raw: &str) -> String {
    let camel = camel_case(raw);
    let source = if camel.is_empty() { raw } else { camel.as_str() };
    upper_first(&truncate(source))
}

/// Hand out `base` or, if taken, the next free `<base><count>`.
///
/// The first repeat of a base yields suffix 1. Suffixed names are registered
/// too so that a later base equal to an issued name cannot reuse it.
pub fn dedupe_name(used_names: &mut HashMap<String, u32>, base: String) -> String {
    let Some(&seen) = used_names.get(&base) else {
        used_names.insert(base.clone(), 1);
        return base;
    };

    let mut count = seen;
    let candidate = loop {
        let candidate = format!("{}{}", base, count);
        count += 1;
        if !used_names.contains_key(&candidate) {
            break candidate;
        }
    };

    used_names.insert(base, count);
    used_names.insert(candidate.clone(), 1);
    candidate
}

fn truncate(s: &str) -> String {
    s.chars().take(MAX_NAME_LENGTH).collect()
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"Email Address"` -> `"emailAddress"`, `"FIRST_NAME"` -> `"firstName"`.
///
/// Accents are folded to ASCII and apostrophes dropped before splitting, so
/// `"Don't save"` is `"dontSave"` and `"Café menu"` is `"cafeMenu"`.
pub fn camel_case(input: &str) -> String {
    let cleaned: String = deburr(input)
        .chars()
        .filter(|c| *c != '\'' && *c != '\u{2019}')
        .collect();

    words(&cleaned)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 { lower } else { upper_first(&lower) }
        })
        .collect()
}

/// Fold Latin-1 letters to their ASCII base and drop combining marks.
fn deburr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if ('\u{300}'..='\u{36f}').contains(&c) {
            continue;
        }
        match latin1_base(c) {
            Some(base) => out.push_str(base),
            None => out.push(c),
        }
    }
    out
}

fn latin1_base(c: char) -> Option<&'static str> {
    let base = match c {
        'À'..='Å' => "A",
        'à'..='å' => "a",
        'Ç' => "C",
        'ç' => "c",
        'Ð' => "D",
        'ð' => "d",
        'È'..='Ë' => "E",
        'è'..='ë' => "e",
        'Ì'..='Ï' => "I",
        'ì'..='ï' => "i",
        'Ñ' => "N",
        'ñ' => "n",
        'Ò'..='Ö' | 'Ø' => "O",
        'ò'..='ö' | 'ø' => "o",
        'Ù'..='Ü' => "U",
        'ù'..='ü' => "u",
        'Ý' => "Y",
        'ý' | 'ÿ' => "y",
        'Æ' => "Ae",
        'æ' => "ae",
        'Þ' => "Th",
        'þ' => "th",
        'ß' => "ss",
        _ => return None,
    };
    Some(base)
}

/// Split on non-alphanumerics, lower-to-upper transitions, the end of an
/// uppercase run (`XMLHttp` -> `XML`, `Http`) and letter/digit boundaries.
fn words(input: &str) -> Vec<String> {
    let mut words = Vec::new();

    for token in input.split(|c: char| !c.is_alphanumeric()).filter(|t| !t.is_empty()) {
        let chars: Vec<char> = token.chars().collect();
        let mut start = 0;

        for i in 1..chars.len() {
            let prev = chars[i - 1];
            let cur = chars[i];
            let next = chars.get(i + 1);

            let boundary = (prev.is_lowercase() && cur.is_uppercase())
                || (prev.is_uppercase()
                    && cur.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()))
                || (prev.is_numeric() != cur.is_numeric());

            if boundary {
                words.push(chars[start..i].iter().collect());
                start = i;
            }
        }
        words.push(chars[start..].iter().collect());
    }

    words
}
