//! Element attributes.

use indexmap::IndexMap;

/// A single attribute.
///
/// An empty value marks a flag attribute (`disabled`, `required`), written
/// either bare or as `name="name"` depending on the dialect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Flag attribute without a value.
    #[must_use]
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    pub fn is_flag(&self) -> bool {
        self.value.is_empty()
    }
}

/// A bare name is a flag.
impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Self::flag(name)
    }
}

impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Self::flag(name)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Attribute {
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, value)
    }
}

/// Ordered attribute map.
///
/// Names are unique. Insertion order is kept: overwriting a name keeps its
/// position and removal keeps the order of the remaining attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an attribute. Empty names are ignored.
    pub fn insert(&mut self, attribute: Attribute) {
        if attribute.name.is_empty() {
            return;
        }
        self.entries.insert(attribute.name, attribute.value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && self.entries.contains_key(name)
    }

    /// Remove an attribute, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<A: Into<Attribute>> FromIterator<A> for Attributes {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut attributes = Self::new();
        attributes.extend(iter);
        attributes
    }
}

impl<A: Into<Attribute>> Extend<A> for Attributes {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute.into());
        }
    }
}
