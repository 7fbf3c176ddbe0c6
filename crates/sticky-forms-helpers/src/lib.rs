//! Sticky form tag helpers
//!
//! Request-aware builders for `<input>`, `<textarea>`, `<option>` and
//! `<select>` tags that re-populate themselves from the current request's
//! submitted values, plus canned pickers for months, days, years and US
//! states.
//!
//! The request is never read from ambient state: every [`FormTags`] is bound
//! to an explicit [`SubmittedParams`] snapshot, so one instance per request
//! can be used from any thread.
//!
//! ## Example
//!
//! ```
//! use sticky_forms_helpers::{Attributes, FormTags, QueryParams};
//!
//! let params = QueryParams::from_urlencoded("name=Ada&agree=true").unwrap();
//! let tags = FormTags::new(&params);
//!
//! assert_eq!(
//! 	tags.input_for("name", &Attributes::new()),
//! 	r#"<input type="text" value="Ada" name="name" id="name">"#
//! );
//! assert!(tags.checkbox_for("agree", false, &Attributes::new()).ends_with(" checked>"));
//! ```

pub mod form_tags;
pub mod links;
pub mod options;
pub mod params;

pub use form_tags::FormTags;
pub use links::{LinkResolver, PathResolver};
pub use options::{OptionEntry, OptionSet, STATE_CODES};
pub use params::{QueryParams, SubmittedParams};

pub use sticky_forms_core::{AttrValue, Attributes, EscapePolicy, QuoteStyle, RenderSettings};
