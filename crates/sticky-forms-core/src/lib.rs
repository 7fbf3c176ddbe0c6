//! Attribute engine and tag primitives for sticky-forms
//!
//! This crate turns ordered attribute mappings into HTML attribute syntax and
//! assembles opening, closing and content-wrapped tags from them:
//!
//! - [`Attributes`] / [`AttrValue`]: ordered, strongly-typed attribute bags
//!   with non-mutating merges
//! - [`to_attributes`], [`tag`], [`close_tag`], [`content_tag`]: verbatim
//!   rendering
//! - [`Markup`]: rendering under a [`RenderSettings`] escaping and quoting
//!   policy (escaping by default)
//! - [`escape_html`] / [`escape_html_attr`]: HTML escaping

pub mod attrs;
pub mod error;
pub mod escape;
pub mod markup;
pub mod settings;

pub use attrs::{AttrValue, Attributes};
pub use error::{TagError, TagResult};
pub use escape::{escape_html, escape_html_attr};
pub use markup::{Markup, close_tag, content_tag, tag, to_attributes};
pub use settings::{EscapePolicy, QuoteStyle, RenderSettings};
