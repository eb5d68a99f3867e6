//! Element factory bound to a shared reference.

use std::sync::Arc;

use oven_reference::Reference;

use crate::attribute::Attribute;
use crate::element::{Element, default_reference};

/// Creates elements that share one [`Reference`].
///
/// Changing the factory's reference only affects elements created afterwards.
#[derive(Clone, Debug)]
pub struct ElementFactory {
    reference: Arc<Reference>,
}

impl ElementFactory {
    /// Create a factory using the given reference.
    #[must_use]
    pub fn new(reference: Arc<Reference>) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &Arc<Reference> {
        &self.reference
    }

    pub fn set_reference(&mut self, reference: Arc<Reference>) {
        self.reference = reference;
    }

    /// Create an element with attributes and inner text.
    pub fn create<I, A>(&self, tag_name: &str, attributes: I, text: &str) -> Element
    where
        I: IntoIterator<Item = A>,
        A: Into<Attribute>,
    {
        Element::new_in(tag_name, Arc::clone(&self.reference))
            .with_attributes(attributes)
            .with_text(text)
    }
}

impl Default for ElementFactory {
    fn default() -> Self {
        Self::new(default_reference())
    }
}
