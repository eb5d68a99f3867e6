//! Dialect profiles for rendering markup trees.
//!
//! A [`Reference`] is a named rendering policy: it knows, per tag, whether a
//! closing tag is required, and carries two global flags that decide how
//! value-less attributes and void elements are written out.
//!
//! The reference renders anything exposing the [`Markup`] shape (tag name,
//! attributes, text and children), so it has no knowledge of how a tree is
//! stored.
//!
//! # Profiles
//!
//! Profiles are looked up by name through [`Reference::of`]:
//! - `html5`: bare flag attributes, void elements end with `>`
//! - `xhtml`: flag attributes get `name="name"`, void elements end with `/>`
//!
//! # Example
//!
//! ```
//! use oven_reference::{Reference, TagRule};
//!
//! let reference = Reference::of("xhtml", [("my-icon", TagRule::void())]).unwrap();
//! assert!(!reference.needs_closing_tag("my-icon"));
//! assert!(reference.needs_closing_tag("section"));
//! ```

mod config;
mod error;
mod escape;
mod markup;
mod profile;
mod reference;
mod tag;

pub use config::DialectConfig;
pub use error::{ConfigError, ReferenceError};
pub use escape::{escape, unescape};
pub use markup::Markup;
pub use profile::{Profile, profiles};
pub use reference::Reference;
pub use tag::TagRule;
