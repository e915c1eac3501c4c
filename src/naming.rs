//! Page file naming and id rules.
//!
//! Content files follow an optional numeric prefix convention: the prefix
//! orders pages in navigation and the rest of the stem names the page. Both
//! dashes and underscores are accepted as the separator, so all of these
//! parse the same way:
//!
//! - `020-observer.toml` → number=20, id="observer"
//! - `05_Observer.toml` → number=5, id="observer"
//! - `05_🔎_Observer.toml` → number=5, id="observer" (non-ASCII is dropped)
//! - `singleton.toml` → unnumbered, id="singleton"
//!
//! Page ids double as output file names (`{id}.html`), so they are restricted
//! to lowercase ASCII letters, digits and single dashes.

/// Result of parsing a page file stem like `020-Chain-of-Responsibility`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g., `20` from `020-Chain-of-Responsibility`)
    pub number: Option<u32>,
    /// Raw remainder after the prefix and its separator.
    pub name: String,
    /// Id derived from `name` with [`slugify`].
    pub id: String,
}

/// Parse a page file stem.
pub fn parse_entry_name(stem: &str) -> ParsedName {
    let digits: String = stem.chars().take_while(|c| c.is_ascii_digit()).collect();
    let rest = &stem[digits.len()..];

    let number = if digits.is_empty() {
        None
    } else if rest.is_empty() || rest.starts_with(['-', '_']) {
        digits.parse::<u32>().ok()
    } else {
        // `3d-printing`: the digits are part of the name
        None
    };

    let name = match number {
        Some(_) => rest.trim_start_matches(['-', '_']).to_string(),
        None => stem.to_string(),
    };
    let id = slugify(&name);

    ParsedName { number, name, id }
}

/// Lowercase `name` and collapse every run of non-alphanumeric ASCII into a
/// single dash. Non-ASCII characters are dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_ascii() {
            pending_dash = true;
        }
    }
    slug
}

/// Ids whose output file the site generator writes itself.
pub const RESERVED_IDS: &[&str] = &["index"];

/// Whether `id` would collide with a generated file such as `index.html`.
pub fn is_reserved_id(id: &str) -> bool {
    RESERVED_IDS.contains(&id)
}

/// Whether `id` is usable as a page id: non-empty, `[a-z0-9]` segments joined
/// by single dashes.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_with_dash() {
        let p = parse_entry_name("020-Chain-of-Responsibility");
        assert_eq!(p.number, Some(20));
        assert_eq!(p.name, "Chain-of-Responsibility");
        assert_eq!(p.id, "chain-of-responsibility");
    }

    #[test]
    fn numbered_with_underscore_and_emoji() {
        let p = parse_entry_name("05_🔎_Observer");
        assert_eq!(p.number, Some(5));
        assert_eq!(p.name, "🔎_Observer");
        assert_eq!(p.id, "observer");
    }

    #[test]
    fn unnumbered() {
        let p = parse_entry_name("singleton");
        assert_eq!(p.number, None);
        assert_eq!(p.id, "singleton");
    }

    #[test]
    fn number_only() {
        let p = parse_entry_name("001");
        assert_eq!(p.number, Some(1));
        assert_eq!(p.name, "");
        assert_eq!(p.id, "");
    }

    #[test]
    fn leading_digits_in_name_are_not_a_prefix() {
        let p = parse_entry_name("3d-printing");
        assert_eq!(p.number, None);
        assert_eq!(p.id, "3d-printing");
    }

    #[test]
    fn zero_prefix() {
        let p = parse_entry_name("000-First");
        assert_eq!(p.number, Some(0));
        assert_eq!(p.id, "first");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Abstract  Factory__Method"), "abstract-factory-method");
        assert_eq!(slugify("--Edge--"), "edge");
        assert_eq!(slugify("🎁 Extras"), "extras");
    }

    #[test]
    fn valid_ids() {
        assert!(is_valid_id("bridge"));
        assert!(is_valid_id("chain-of-responsibility"));
        assert!(is_valid_id("gof-23"));
    }

    #[test]
    fn index_is_reserved() {
        assert!(is_reserved_id("index"));
        assert!(!is_reserved_id("index-pattern"));
        assert!(!is_reserved_id("bridge"));
    }

    #[test]
    fn invalid_ids() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("Bridge"));
        assert!(!is_valid_id("two words"));
        assert!(!is_valid_id("-leading"));
        assert!(!is_valid_id("double--dash"));
        assert!(!is_valid_id("trailing-"));
    }
}
