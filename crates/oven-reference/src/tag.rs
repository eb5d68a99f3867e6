//! Per-tag rendering rules.

use serde::Deserialize;

/// Rendering rule for a single tag name.
///
/// Every field is optional; a rule without any field set is empty and is
/// ignored by [`Reference::add_tag`](crate::Reference::add_tag).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagRule {
    /// Whether the tag is written with a closing tag.
    ///
    /// `None` falls back to `true`.
    pub has_closing_tag: Option<bool>,
}

impl TagRule {
    /// Rule for a tag with a closing tag (`<p></p>`).
    #[must_use]
    pub fn closing() -> Self {
        Self {
            has_closing_tag: Some(true),
        }
    }

    /// Rule for a void tag (`<br>` or `<br/>`).
    #[must_use]
    pub fn void() -> Self {
        Self {
            has_closing_tag: Some(false),
        }
    }

    /// Whether no field of the rule is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.has_closing_tag.is_none()
    }

    /// Whether the tag needs a closing tag, defaulting to `true`.
    #[must_use]
    pub fn needs_closing_tag(&self) -> bool {
        self.has_closing_tag.unwrap_or(true)
    }
}
