//! Markup element trees.
//!
//! An [`Element`] holds a tag name, ordered attributes, inner text and owned
//! children. It carries no rendering rules of its own: [`Element::render`]
//! hands the tree to the shared [`Reference`] it is bound to.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use oven_element::{Attribute, Element};
//! use oven_reference::Reference;
//!
//! let mut input = Element::new("input").with_attributes([
//!     Attribute::new("type", "text"),
//!     Attribute::new("name", "someName"),
//!     Attribute::flag("required"),
//! ]);
//! assert_eq!(input.render(), r#"<input type="text" name="someName" required>"#);
//!
//! input.set_reference(Arc::new(Reference::xhtml()));
//! assert_eq!(
//!     input.render(),
//!     r#"<input type="text" name="someName" required="required"/>"#
//! );
//! ```

mod attribute;
mod element;
mod error;
mod factory;

pub use attribute::{Attribute, Attributes};
pub use element::Element;
pub use error::ElementError;
pub use factory::ElementFactory;
pub use oven_reference::Reference;
