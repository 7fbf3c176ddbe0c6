//! # Sticky Forms
//!
//! Server-side HTML form tag helpers that re-populate fields from the
//! current request's submitted values.
//!
//! ## Feature Flags
//!
//! - `core` - Attribute engine, HTML escaping and tag primitives
//! - `helpers` - Request-aware field, select and option-set builders
//! - `full` (default) - Everything above
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "helpers")]
//! # {
//! use sticky_forms::prelude::*;
//!
//! let params = QueryParams::from_urlencoded("size=L").unwrap();
//! let tags = FormTags::new(&params);
//! let sizes = OptionSet::from_pairs([("Small", "S"), ("Large", "L")]);
//!
//! assert_eq!(
//! 	tags.select_for("size", &sizes, &Attributes::new()),
//! 	concat!(
//! 		r#"<select name="size" id="size" size="1"> "#,
//! 		r#"<option value="S">Small</option> "#,
//! 		r#"<option value="L" selected>Large</option> "#,
//! 		"</select>"
//! 	)
//! );
//! # }
//! ```

#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "helpers")]
pub mod helpers;

// Re-export core types
#[cfg(feature = "core")]
pub use sticky_forms_core::{
	AttrValue, Attributes, EscapePolicy, Markup, QuoteStyle, RenderSettings, TagError, TagResult,
	close_tag, content_tag, escape_html, escape_html_attr, tag, to_attributes,
};

// Re-export tag helpers
#[cfg(feature = "helpers")]
pub use sticky_forms_helpers::{
	FormTags, LinkResolver, OptionEntry, OptionSet, PathResolver, QueryParams, SubmittedParams,
};

/// Prelude module for convenient imports
pub mod prelude {
	#[cfg(feature = "core")]
	pub use crate::{
		AttrValue, Attributes, EscapePolicy, Markup, QuoteStyle, RenderSettings, TagError,
		TagResult, escape_html,
	};

	#[cfg(feature = "helpers")]
	pub use crate::{
		FormTags, LinkResolver, OptionEntry, OptionSet, PathResolver, QueryParams, SubmittedParams,
	};
}
