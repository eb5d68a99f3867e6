//! Element tree node.

use std::fmt;
use std::sync::{Arc, LazyLock};

use oven_reference::{Markup, Reference};

use crate::attribute::{Attribute, Attributes};
use crate::error::ElementError;

/// Default tag name for new elements.
const DEFAULT_TAG_NAME: &str = "div";

/// Reference shared by elements created without one.
static DEFAULT_REFERENCE: LazyLock<Arc<Reference>> =
    LazyLock::new(|| Arc::new(Reference::html5()));

/// The shared default (HTML5) reference.
pub(crate) fn default_reference() -> Arc<Reference> {
    Arc::clone(&DEFAULT_REFERENCE)
}

/// A markup element with attributes, text and children.
///
/// Children are owned exclusively by their parent. The [`Reference`] is
/// shared and only consulted when rendering or when adding children.
///
/// Cloning an element clones its whole subtree but keeps sharing the
/// reference.
#[derive(Clone, Debug)]
pub struct Element {
    tag_name: String,
    attributes: Attributes,
    text: String,
    children: Vec<Element>,
    reference: Arc<Reference>,
}

impl Element {
    /// Create an element bound to the default HTML5 reference.
    ///
    /// An empty tag name falls back to `div`.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self::new_in(tag_name, default_reference())
    }

    /// Create an element bound to the given reference.
    ///
    /// An empty tag name falls back to `div`.
    #[must_use]
    pub fn new_in(tag_name: impl Into<String>, reference: Arc<Reference>) -> Self {
        let mut element = Self {
            tag_name: DEFAULT_TAG_NAME.to_owned(),
            attributes: Attributes::new(),
            text: String::new(),
            children: Vec::new(),
            reference,
        };
        element.set_tag_name(tag_name);
        element
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(name, value);
        self
    }

    /// Add a flag attribute.
    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.add_flag(name);
        self
    }

    /// Replace all attributes.
    #[must_use]
    pub fn with_attributes<I, A>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        self.set_attributes(attributes);
        self
    }

    /// Set inner text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Append a child.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidOperation`] if the tag is void.
    pub fn try_with_child(mut self, child: Element) -> Result<Self, ElementError> {
        self.add_child(child)?;
        Ok(self)
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Set the tag name. Empty names are ignored and the current one is kept.
    pub fn set_tag_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.tag_name = name;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn reference(&self) -> &Arc<Reference> {
        &self.reference
    }

    /// Bind the element to another reference.
    ///
    /// Children keep their own references.
    pub fn set_reference(&mut self, reference: Arc<Reference>) {
        self.reference = reference;
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Replace all attributes, keeping the given order.
    pub fn set_attributes<I, A>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        self.attributes.clear();
        self.attributes.extend(attributes);
    }

    /// Insert or overwrite an attribute. An empty value makes it a flag.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(Attribute::new(name, value));
    }

    /// Insert a flag attribute.
    pub fn add_flag(&mut self, name: impl Into<String>) {
        self.attributes.insert(Attribute::flag(name));
    }

    /// Attribute value, or `None` if it is not set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Whether the active reference allows children for this tag.
    pub fn accepts_children(&self) -> bool {
        self.reference.needs_closing_tag(&self.tag_name)
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Replace all children.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidOperation`] if the tag is void and the
    /// list is not empty. The current children are kept in that case.
    pub fn set_children<I>(&mut self, children: I) -> Result<(), ElementError>
    where
        I: IntoIterator<Item = Element>,
    {
        let children: Vec<Element> = children.into_iter().collect();
        if !children.is_empty() {
            self.ensure_accepts_children()?;
        }
        self.children = children;
        Ok(())
    }

    /// Append a child.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidOperation`] if the tag is void; the
    /// children are left unchanged.
    pub fn add_child(&mut self, child: Element) -> Result<(), ElementError> {
        self.ensure_accepts_children()?;
        self.children.push(child);
        Ok(())
    }

    pub fn first_child(&self) -> Option<&Element> {
        self.children.first()
    }

    pub fn last_child(&self) -> Option<&Element> {
        self.children.last()
    }

    pub fn count_children(&self) -> usize {
        self.children.len()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Call `f` on every child in order.
    pub fn each_child<F>(&mut self, f: F)
    where
        F: FnMut(&mut Element),
    {
        self.children.iter_mut().for_each(f);
    }

    /// Collect `f` applied to every child in order.
    ///
    /// Children are not cloned: changes `f` makes to a child stay in the tree.
    pub fn map_children<T, F>(&mut self, f: F) -> Vec<T>
    where
        F: FnMut(&mut Element) -> T,
    {
        self.children.iter_mut().map(f).collect()
    }

    /// Keep only the children for which `f` returns `true`.
    pub fn filter_children<F>(&mut self, mut f: F)
    where
        F: FnMut(&Element) -> bool,
    {
        self.children.retain(|child| f(child));
    }

    /// Render the element and its subtree with the bound reference.
    ///
    /// Recurses once per nesting level, as does dropping the tree; see
    /// [`Reference::render`] for the depth limit.
    pub fn render(&self) -> String {
        self.reference.render(self)
    }

    fn ensure_accepts_children(&self) -> Result<(), ElementError> {
        if self.accepts_children() {
            return Ok(());
        }
        tracing::debug!(
            tag = %self.tag_name,
            reference = self.reference.name(),
            "Rejected child for void element"
        );
        Err(ElementError::InvalidOperation {
            tag: self.tag_name.clone(),
        })
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_NAME)
    }
}

impl Markup for Element {
    type Child = Element;

    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter()
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn children(&self) -> &[Element] {
        &self.children
    }

    fn reference(&self) -> Option<&Reference> {
        Some(self.reference.as_ref())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
