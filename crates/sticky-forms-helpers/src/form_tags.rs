//! Sticky form tag builders
//!
//! [`FormTags`] binds a request's [`SubmittedParams`] snapshot to a
//! [`RenderSettings`] and renders inputs, textareas, options and selects that
//! re-populate themselves from the submitted values.
//!
//! Every builder takes the caller's attributes by reference and merges them
//! over its own defaults; caller attributes win on key collision. Equality
//! between a submitted value and a candidate value is plain string equality
//! of their string forms (`"7"` never matches `"07"`).

use crate::links::LinkResolver;
use crate::options::OptionSet;
use crate::params::SubmittedParams;
use std::ops::RangeInclusive;
use sticky_forms_core::{AttrValue, Attributes, Markup, RenderSettings};

/// Tag builders bound to one request's submitted parameters
///
/// # Examples
///
/// ```
/// use sticky_forms_helpers::{Attributes, FormTags, QueryParams};
///
/// let params = QueryParams::new().with("color", "red");
/// let tags = FormTags::new(&params);
///
/// assert_eq!(
/// 	tags.radio_for("color", &Attributes::new().attr("value", "red")),
/// 	r#"<input type="radio" value="red" name="color" id="color" checked>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FormTags<'a, P: SubmittedParams + ?Sized> {
	params: &'a P,
	settings: RenderSettings,
	markup: Markup,
}

impl<'a, P: SubmittedParams + ?Sized> FormTags<'a, P> {
	/// Builders with the default (escaping, double-quoted) settings
	pub fn new(params: &'a P) -> Self {
		Self::with_settings(params, RenderSettings::default())
	}

	pub fn with_settings(params: &'a P, settings: RenderSettings) -> Self {
		let markup = Markup::from(&settings);
		Self {
			params,
			settings,
			markup,
		}
	}

	pub fn settings(&self) -> &RenderSettings {
		&self.settings
	}

	pub fn markup(&self) -> Markup {
		self.markup
	}

	/// Submitted value for `param`
	pub fn submitted(&self, param: &str) -> Option<&'a str> {
		self.params.submitted_value(param)
	}

	/// Submitted value for `param` unless it is blank
	fn present(&self, param: &str) -> Option<&'a str> {
		self.submitted(param).filter(|value| !value.trim().is_empty())
	}

	/// `<input>` pre-filled with the submitted value
	///
	/// Defaults: `type="text"`, `value` = submitted value or empty,
	/// `name` and `id` = `param`.
	pub fn input_for(&self, param: &str, attrs: &Attributes) -> String {
		let defaults = Attributes::new()
			.attr("type", "text")
			.attr("value", self.submitted(param).unwrap_or_default())
			.attr("name", param)
			.attr("id", param);

		self.markup
			.open_tag("input", &Attributes::merged(&defaults, attrs))
	}

	/// Hidden `<input>` carrying a fixed value
	pub fn hidden_for(&self, param: &str, value: &str, attrs: &Attributes) -> String {
		let defaults = Attributes::new().attr("type", "hidden").attr("value", value);
		self.input_for(param, &Attributes::merged(&defaults, attrs))
	}

	/// Radio `<input>`, `checked` when the submitted value equals `attrs["value"]`
	///
	/// A missing submitted value and a missing `value` attribute both compare
	/// as the empty string.
	pub fn radio_for(&self, param: &str, attrs: &Attributes) -> String {
		let attrs = Attributes::merged(&Attributes::new().attr("type", "radio"), attrs);

		let submitted = self.submitted(param).unwrap_or_default();
		let candidate = attrs.value_str("value").unwrap_or_default();
		let checked = submitted == candidate;
		if checked {
			tracing::trace!(param, value = candidate, "radio marked checked");
		}

		self.input_for(param, &attrs.flag("checked", checked))
	}

	/// Checkbox `<input>` with `value="true"`
	///
	/// `checked` when `checked_if` is true or the submitted value is `"true"`.
	pub fn checkbox_for(&self, param: &str, checked_if: bool, attrs: &Attributes) -> String {
		let defaults = Attributes::new()
			.attr("type", "checkbox")
			.attr("value", "true");
		let attrs = Attributes::merged(&defaults, attrs);

		let checked = checked_if || self.submitted(param) == Some("true");
		if checked {
			tracing::trace!(param, checked_if, "checkbox marked checked");
		}

		self.input_for(param, &attrs.flag("checked", checked))
	}

	/// `<textarea>` whose body is the submitted value
	pub fn textarea_for(&self, param: &str, attrs: &Attributes) -> String {
		let defaults = Attributes::new().attr("name", param).attr("id", param);
		let content = self.markup.text(self.submitted(param).unwrap_or_default());

		self.markup.content_tag(
			"textarea",
			&content,
			&Attributes::merged(&defaults, attrs),
		)
	}

	/// `<option>` labelled by `attrs["key"]`
	///
	/// `default` is consumed and names the value to select when nothing was
	/// submitted; a non-blank submitted value takes its place. The option is
	/// `selected` when that target equals `attrs["value"]`. `key` becomes the
	/// label and `default` is never rendered.
	///
	/// # Examples
	///
	/// ```
	/// use sticky_forms_helpers::{Attributes, FormTags, QueryParams};
	///
	/// let params = QueryParams::new();
	/// let tags = FormTags::new(&params);
	/// let attrs = Attributes::new()
	/// 	.attr("key", "Medium")
	/// 	.attr("value", "M")
	/// 	.attr("default", "M");
	///
	/// assert_eq!(tags.option_for("size", &attrs), r#"<option value="M" selected>Medium</option>"#);
	/// ```
	pub fn option_for(&self, param: &str, attrs: &Attributes) -> String {
		let (default, attrs) = attrs.clone().take("default");

		let target = match self.present(param) {
			Some(submitted) => submitted,
			None => default
				.as_ref()
				.map(AttrValue::as_compare_str)
				.unwrap_or_default(),
		};
		let candidate = attrs.value_str("value").unwrap_or_default();
		let selected = target == candidate;
		if selected {
			tracing::trace!(param, value = candidate, "option marked selected");
		}

		let (label, attrs) = attrs.flag("selected", selected).take("key");
		let label = label
			.as_ref()
			.map(AttrValue::as_compare_str)
			.unwrap_or_default();

		self.markup
			.content_tag("option", &self.markup.text(label), &attrs)
	}

	/// `<select>` over `options`
	///
	/// Defaults: `name` and `id` = `param`, `size="1"`. A `default` attribute
	/// is handed to every option instead of being rendered on the select.
	/// Pieces are joined with single spaces.
	pub fn select_for(&self, param: &str, options: &OptionSet, attrs: &Attributes) -> String {
		let (default, attrs) = attrs.clone().take("default");
		let defaults = Attributes::new()
			.attr("name", param)
			.attr("id", param)
			.attr("size", "1");

		let mut parts = Vec::with_capacity(options.len() + 2);
		parts.push(
			self.markup
				.open_tag("select", &Attributes::merged(&defaults, &attrs)),
		);

		for entry in options {
			let mut option_attrs = Attributes::new()
				.attr("key", &entry.label)
				.attr("value", &entry.value);
			if let Some(default) = &default {
				option_attrs.insert("default", default.clone());
			}
			parts.push(self.option_for(param, &option_attrs));
		}

		parts.push(self.markup.close_tag("select"));
		parts.join(" ")
	}

	/// Month picker; values `"01"` … `"12"`
	pub fn months_for(&self, param: &str, attrs: &Attributes) -> String {
		self.select_for(param, &OptionSet::months(), attrs)
	}

	/// Day picker; values `"1"` … `"31"`
	pub fn days_for(&self, param: &str, attrs: &Attributes) -> String {
		self.select_for(param, &OptionSet::days(), attrs)
	}

	/// Year picker
	///
	/// Without a `range`, offers `first_year` from the settings through the
	/// current year, newest first. The default range is recomputed per call.
	pub fn years_for(
		&self,
		param: &str,
		range: Option<RangeInclusive<i32>>,
		attrs: &Attributes,
	) -> String {
		let years = match range {
			Some(range) => OptionSet::years(range),
			None => OptionSet::years_since(self.settings.first_year),
		};
		self.select_for(param, &years, attrs)
	}

	/// US state picker (50 states plus DC, by code)
	pub fn states_for(&self, param: &str, attrs: &Attributes) -> String {
		self.select_for(param, &OptionSet::states(), attrs)
	}

	/// `<a>` to the resolved `path`
	///
	/// The configured active class is appended to `class` when the resolved
	/// URL equals the resolver's current path.
	pub fn link_for<R: LinkResolver + ?Sized>(
		&self,
		resolver: &R,
		path: &str,
		text: &str,
		attrs: &Attributes,
	) -> String {
		let href = resolver.resolve_link(path);
		let active = resolver.current_path() == Some(href.as_str());

		let mut attrs = Attributes::merged(&Attributes::new().attr("href", href.as_str()), attrs);
		if active {
			attrs = attrs.class(self.settings.active_class.as_str());
		}

		self.markup
			.content_tag("a", &self.markup.text(text), &attrs)
	}
}
