//! Registry of built-in dialect profiles.

/// Tags that are always written with a closing tag.
const CLOSING_TAGS: &[&str] = &["div", "p", "span"];

/// HTML void elements.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// A built-in dialect profile.
#[derive(Debug, PartialEq, Eq)]
pub struct Profile {
    /// Registry key (upper case).
    pub name: &'static str,
    /// Write flag attributes as `name="name"`.
    pub value_on_optionals: bool,
    /// Terminate void elements with `/>`.
    pub slash_on_unclosables: bool,
    /// Tags with a closing tag.
    pub closing_tags: &'static [&'static str],
    /// Tags without a closing tag.
    pub void_tags: &'static [&'static str],
}

pub(crate) static HTML5: Profile = Profile {
    name: "HTML5",
    value_on_optionals: false,
    slash_on_unclosables: false,
    closing_tags: CLOSING_TAGS,
    void_tags: VOID_TAGS,
};

pub(crate) static XHTML: Profile = Profile {
    name: "XHTML",
    value_on_optionals: true,
    slash_on_unclosables: true,
    closing_tags: CLOSING_TAGS,
    void_tags: VOID_TAGS,
};

static PROFILES: [&Profile; 2] = [&HTML5, &XHTML];

/// All registered profiles.
pub fn profiles() -> impl Iterator<Item = &'static Profile> {
    PROFILES.iter().copied()
}

impl Profile {
    /// Look up a profile by name, ignoring case and surrounding whitespace.
    pub fn lookup(name: &str) -> Option<&'static Profile> {
        let key = name.trim().to_uppercase();
        profiles().find(|profile| profile.name == key)
    }

    /// Lower-case name used by references built from this profile.
    pub(crate) fn reference_name(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Profile::lookup("html5").map(|p| p.name), Some("HTML5"));
        assert_eq!(Profile::lookup(" XHtml ").map(|p| p.name), Some("XHTML"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(Profile::lookup("html4").is_none());
        assert!(Profile::lookup("").is_none());
    }

    #[test]
    fn test_profiles_share_void_tags() {
        for profile in profiles() {
            assert!(profile.void_tags.contains(&"input"));
            assert!(!profile.void_tags.contains(&"div"));
        }
    }

    #[test]
    fn test_xhtml_flags() {
        let xhtml = Profile::lookup("xhtml").unwrap();
        assert!(xhtml.value_on_optionals);
        assert!(xhtml.slash_on_unclosables);
    }
}
