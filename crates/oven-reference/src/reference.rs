//! Dialect reference and the rendering algorithm.

use indexmap::IndexMap;

use crate::ReferenceError;
use crate::escape::escape;
use crate::markup::Markup;
use crate::profile::{HTML5, Profile, XHTML};
use crate::tag::TagRule;

/// Named rendering policy for markup trees.
///
/// Holds per-tag [`TagRule`]s plus two global flags:
/// - `value_on_optionals`: write flag attributes as `name="name"` instead of `name`
/// - `slash_on_unclosables`: terminate void elements with `/>` instead of `>`
///
/// Tags without a rule are rendered with a closing tag.
///
/// A reference is usually built once and shared between many elements
/// through an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    name: String,
    tags: IndexMap<String, TagRule>,
    value_on_optionals: bool,
    slash_on_unclosables: bool,
}

impl Reference {
    /// Create a reference with no tag rules and both flags disabled.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: IndexMap::new(),
            value_on_optionals: false,
            slash_on_unclosables: false,
        }
    }

    /// Build a reference from a profile's base rule set.
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        let closing = profile
            .closing_tags
            .iter()
            .map(|tag| ((*tag).to_owned(), TagRule::closing()));
        let void = profile
            .void_tags
            .iter()
            .map(|tag| ((*tag).to_owned(), TagRule::void()));

        Self {
            name: profile.reference_name(),
            tags: closing.chain(void).collect(),
            value_on_optionals: profile.value_on_optionals,
            slash_on_unclosables: profile.slash_on_unclosables,
        }
    }

    /// Empty override list for [`Reference::of`].
    pub const NO_OVERRIDES: [(&'static str, TagRule); 0] = [];

    /// Resolve a registered profile by name (case-insensitive) and merge tag
    /// rule overrides over its defaults.
    ///
    /// Overrides follow [`Reference::with_tags`]: overridden tags keep their
    /// position, new tags are appended and empty rules are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ReferenceError::NotFound`] if no profile has that name.
    pub fn of<I, K>(name: &str, overrides: I) -> Result<Self, ReferenceError>
    where
        I: IntoIterator<Item = (K, TagRule)>,
        K: Into<String>,
    {
        let Some(profile) = Profile::lookup(name) else {
            tracing::debug!(profile = %name, "Unknown dialect profile");
            return Err(ReferenceError::NotFound(name.to_owned()));
        };

        let overrides: Vec<(K, TagRule)> = overrides.into_iter().collect();
        tracing::debug!(
            profile = profile.name,
            overrides = overrides.len(),
            "Resolved dialect profile"
        );

        Ok(Self::from_profile(profile).with_tags(overrides))
    }

    /// The HTML5 profile.
    #[must_use]
    pub fn html5() -> Self {
        Self::from_profile(&HTML5)
    }

    /// The XHTML profile.
    #[must_use]
    pub fn xhtml() -> Self {
        Self::from_profile(&XHTML)
    }

    /// Merge tag rules over the current ones.
    ///
    /// Overridden tags keep their position, new tags are appended.
    #[must_use]
    pub fn with_tags<I, K>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = (K, TagRule)>,
        K: Into<String>,
    {
        for (name, rule) in tags {
            self.add_tag(name, rule);
        }
        self
    }

    /// Set whether flag attributes are written with a value.
    #[must_use]
    pub fn with_value_on_optionals(mut self, enabled: bool) -> Self {
        self.value_on_optionals = enabled;
        self
    }

    /// Set whether void elements are terminated with `/>`.
    #[must_use]
    pub fn with_slash_on_unclosables(mut self, enabled: bool) -> Self {
        self.slash_on_unclosables = enabled;
        self
    }

    /// Profile name this reference was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_on_optionals(&self) -> bool {
        self.value_on_optionals
    }

    pub fn set_value_on_optionals(&mut self, enabled: bool) {
        self.value_on_optionals = enabled;
    }

    pub fn slash_on_unclosables(&self) -> bool {
        self.slash_on_unclosables
    }

    pub fn set_slash_on_unclosables(&mut self, enabled: bool) {
        self.slash_on_unclosables = enabled;
    }

    /// Replace all tag rules.
    pub fn set_tags<I, K>(&mut self, tags: I)
    where
        I: IntoIterator<Item = (K, TagRule)>,
        K: Into<String>,
    {
        self.clear_tags();
        for (name, rule) in tags {
            self.add_tag(name, rule);
        }
    }

    /// Tag rules in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &TagRule)> {
        self.tags.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Insert or overwrite a tag rule.
    ///
    /// Empty names and empty rules are ignored.
    pub fn add_tag(&mut self, name: impl Into<String>, rule: TagRule) {
        let name = name.into();
        if name.is_empty() || rule.is_empty() {
            return;
        }
        self.tags.insert(name, rule);
    }

    /// Rule for a tag, if one is registered.
    pub fn tag(&self, name: &str) -> Option<&TagRule> {
        self.tags.get(name)
    }

    /// Whether a rule is registered for the tag.
    pub fn has_tag(&self, name: &str) -> bool {
        !name.is_empty() && self.tags.contains_key(name)
    }

    /// Remove a tag rule, returning it if it was registered.
    pub fn remove_tag(&mut self, name: &str) -> Option<TagRule> {
        self.tags.shift_remove(name)
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// Whether the tag is written with a closing tag.
    ///
    /// Unknown tags need one.
    pub fn needs_closing_tag(&self, name: &str) -> bool {
        self.tag(name).is_none_or(TagRule::needs_closing_tag)
    }

    /// Render an element and its subtree.
    ///
    /// # Panics
    ///
    /// Rendering recurses once per nesting level. A tree nested deeper than
    /// the thread's stack allows (on the order of tens of thousands of
    /// levels with the default stack) overflows the stack and aborts.
    pub fn render<M: Markup>(&self, element: &M) -> String {
        let mut out = String::with_capacity(64);
        self.render_into(element, &mut out);
        out
    }

    /// Render an element and its subtree, appending to `out`.
    ///
    /// Children that expose their own reference are rendered with it.
    /// Recursion depth follows the tree depth, see [`Reference::render`].
    pub fn render_into<M: Markup>(&self, element: &M, out: &mut String) {
        let tag_name = element.tag_name();

        out.push('<');
        out.push_str(tag_name);

        for (name, value) in element.attributes() {
            out.push(' ');
            self.write_attribute(name, value, out);
        }

        if self.needs_closing_tag(tag_name) {
            out.push('>');
            out.push_str(&escape(element.text()));

            for child in element.children() {
                let reference = child.reference().unwrap_or(self);
                reference.render_into(child, out);
            }

            out.push_str("</");
            out.push_str(tag_name);
            out.push('>');
        } else if self.slash_on_unclosables {
            out.push_str("/>");
        } else {
            out.push('>');
        }
    }

    /// Compile an element's attributes into a space-separated string.
    pub fn compile_attributes<M: Markup>(&self, element: &M) -> String {
        let mut out = String::new();
        for (index, (name, value)) in element.attributes().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            self.write_attribute(name, value, &mut out);
        }
        out
    }

    fn write_attribute(&self, name: &str, value: &str, out: &mut String) {
        let name = escape(name);
        out.push_str(&name);

        // Flag attribute
        if value.is_empty() {
            if self.value_on_optionals {
                out.push_str("=\"");
                out.push_str(&name);
                out.push('"');
            }
            return;
        }

        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self::html5()
    }
}
