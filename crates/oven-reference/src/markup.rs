//! Public shape of a renderable node.

use crate::Reference;

/// A node that a [`Reference`] can render.
///
/// Only the shape matters here: how the node stores its data is up to the
/// implementor.
pub trait Markup {
    /// Type of the node's children.
    type Child: Markup;

    /// Tag name, written as-is.
    fn tag_name(&self) -> &str;

    /// Attributes as `(name, value)` pairs in rendering order.
    ///
    /// An empty value marks a flag attribute.
    fn attributes(&self) -> impl Iterator<Item = (&str, &str)>;

    /// Inner text, escaped on output.
    fn text(&self) -> &str;

    /// Child nodes in rendering order.
    fn children(&self) -> &[Self::Child];

    /// Reference bound to this node, if any.
    ///
    /// When a child returns `Some`, its subtree is rendered with that
    /// reference instead of the parent's.
    fn reference(&self) -> Option<&Reference> {
        None
    }
}
