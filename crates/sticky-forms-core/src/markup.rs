//! Attribute serialization and tag primitives
//!
//! The free functions ([`to_attributes`], [`tag`], [`close_tag`],
//! [`content_tag`]) interpolate values verbatim with double quotes. [`Markup`]
//! renders the same shapes under a [`RenderSettings`] escaping and quoting
//! policy; its default escapes.

use crate::attrs::{AttrValue, Attributes};
use crate::escape::{escape_html, escape_html_attr};
use crate::settings::{EscapePolicy, QuoteStyle, RenderSettings};
use std::borrow::Cow;

/// Settings-bound tag renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markup {
	escape: EscapePolicy,
	quote: QuoteStyle,
}

impl Markup {
	/// Verbatim, double-quoted rendering
	pub const RAW: Markup = Markup {
		escape: EscapePolicy::Raw,
		quote: QuoteStyle::Double,
	};

	pub fn new(escape: EscapePolicy, quote: QuoteStyle) -> Self {
		Self { escape, quote }
	}

	pub fn escape_policy(&self) -> EscapePolicy {
		self.escape
	}

	pub fn quote_style(&self) -> QuoteStyle {
		self.quote
	}

	/// Text node content under the escaping policy
	pub fn text<'a>(&self, content: &'a str) -> Cow<'a, str> {
		match self.escape {
			EscapePolicy::Escape => Cow::Owned(escape_html(content)),
			EscapePolicy::Raw => Cow::Borrowed(content),
		}
	}

	fn attr_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
		match self.escape {
			EscapePolicy::Escape => Cow::Owned(escape_html_attr(value)),
			EscapePolicy::Raw => Cow::Borrowed(value),
		}
	}

	/// Serialize a mapping into space-separated HTML attribute tokens
	///
	/// Only values follow the escape policy; names are written verbatim.
	///
	/// # Examples
	///
	/// ```
	/// use sticky_forms_core::{Attributes, Markup};
	///
	/// let attrs = Attributes::new().attr("title", "Tom & Jerry").flag("hidden", true);
	/// assert_eq!(
	/// 	Markup::default().attributes(&attrs),
	/// 	r#"title="Tom &amp; Jerry" hidden"#
	/// );
	/// ```
	pub fn attributes(&self, attrs: &Attributes) -> String {
		let quote = self.quote.as_char();
		let mut tokens: Vec<String> = Vec::with_capacity(attrs.len());

		for (key, value) in attrs {
			match value {
				AttrValue::Nested(inner) => {
					for (inner_key, inner_value) in inner {
						tokens.push(format!(
							"{}-{}={}{}{}",
							key,
							inner_key,
							quote,
							self.attr_value(inner_value),
							quote
						));
					}
				}
				AttrValue::Flag => tokens.push(key.clone()),
				AttrValue::Text(text) => {
					tokens.push(format!(
						"{}={}{}{}",
						key,
						quote,
						self.attr_value(text),
						quote
					));
				}
			}
		}

		tokens.join(" ")
	}

	/// `<name attrs>`; an empty mapping renders as `<name>`
	pub fn open_tag(&self, name: &str, attrs: &Attributes) -> String {
		let serialized = self.attributes(attrs);
		if serialized.is_empty() {
			format!("<{}>", name)
		} else {
			format!("<{} {}>", name, serialized)
		}
	}

	pub fn close_tag(&self, name: &str) -> String {
		format!("</{}>", name)
	}

	/// Open tag, `content` as given, close tag
	///
	/// `content` is not escaped here so that callers can nest markup; use
	/// [`Markup::text`] for text nodes.
	pub fn content_tag(&self, name: &str, content: &str, attrs: &Attributes) -> String {
		format!(
			"{}{}{}",
			self.open_tag(name, attrs),
			content,
			self.close_tag(name)
		)
	}
}

impl From<&RenderSettings> for Markup {
	fn from(settings: &RenderSettings) -> Self {
		Markup::new(settings.escape, settings.quote)
	}
}

/// Serialize attributes verbatim
///
/// # Examples
///
/// ```
/// use sticky_forms_core::{Attributes, to_attributes};
///
/// let attrs = Attributes::new()
/// 	.attr("name", "color")
/// 	.flag("checked", true)
/// 	.nested("data", [("foo", "bar")]);
/// assert_eq!(to_attributes(&attrs), r#"name="color" checked data-foo="bar""#);
/// ```
pub fn to_attributes(attrs: &Attributes) -> String {
	Markup::RAW.attributes(attrs)
}

/// Opening tag with no content
pub fn tag(name: &str, attrs: &Attributes) -> String {
	Markup::RAW.open_tag(name, attrs)
}

pub fn close_tag(name: &str) -> String {
	Markup::RAW.close_tag(name)
}

/// Tag wrapping `content`
///
/// # Examples
///
/// ```
/// use sticky_forms_core::{Attributes, content_tag};
///
/// let attrs = Attributes::new().attr("value", "L");
/// assert_eq!(content_tag("option", "Large", &attrs), r#"<option value="L">Large</option>"#);
/// ```
pub fn content_tag(name: &str, content: &str, attrs: &Attributes) -> String {
	Markup::RAW.content_tag(name, content, attrs)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_policy_leaves_names_verbatim() {
		let attrs = Attributes::new().attr("x onmouseover", "<go>");
		assert_eq!(
			Markup::default().attributes(&attrs),
			r#"x onmouseover="&lt;go&gt;""#
		);
	}

	#[rstest]
	fn test_scalar_tokens_in_insertion_order() {
		let attrs = Attributes::new()
			.attr("type", "text")
			.attr("value", "")
			.attr("name", "q")
			.attr("id", "q");
		assert_eq!(
			to_attributes(&attrs),
			r#"type="text" value="" name="q" id="q""#
		);
	}

	#[rstest]
	fn test_flag_is_bare_token() {
		let attrs = Attributes::new().attr("value", "L").flag("selected", true);
		assert_eq!(to_attributes(&attrs), r#"value="L" selected"#);
	}

	#[rstest]
	fn test_nested_flattens_one_level() {
		let attrs = Attributes::new().nested("data", [("foo", "bar"), ("baz", "1")]);
		assert_eq!(to_attributes(&attrs), r#"data-foo="bar" data-baz="1""#);
	}

	#[rstest]
	fn test_empty_nested_renders_nothing() {
		let attrs = Attributes::new()
			.attr("a", "1")
			.nested("data", Vec::<(String, String)>::new());
		assert_eq!(to_attributes(&attrs), r#"a="1""#);
	}

	#[rstest]
	fn test_raw_leaves_values_untouched() {
		let attrs = Attributes::new().attr("value", "<b>\"x\"</b>");
		assert_eq!(to_attributes(&attrs), r#"value="<b>"x"</b>""#);
	}

	#[rstest]
	fn test_escape_policy_escapes_scalar_and_nested() {
		let attrs = Attributes::new()
			.attr("value", "\"><script>")
			.data("note", "a&b");
		assert_eq!(
			Markup::default().attributes(&attrs),
			r#"value="&quot;&gt;&lt;script&gt;" data-note="a&amp;b""#
		);
	}

	#[rstest]
	fn test_single_quote_style() {
		let markup = Markup::new(EscapePolicy::Escape, QuoteStyle::Single);
		let attrs = Attributes::new().attr("title", "it's");
		assert_eq!(markup.attributes(&attrs), "title='it&#x27;s'");
	}

	#[rstest]
	#[case(Attributes::new(), "<br>")]
	#[case(Attributes::new().attr("class", "x"), r#"<br class="x">"#)]
	fn test_tag(#[case] attrs: Attributes, #[case] expected: &str) {
		assert_eq!(tag("br", &attrs), expected);
	}

	#[rstest]
	fn test_close_tag() {
		assert_eq!(close_tag("select"), "</select>");
	}

	#[rstest]
	fn test_content_tag_does_not_escape_content() {
		let html = Markup::default().content_tag("p", "<em>hi</em>", &Attributes::new());
		assert_eq!(html, "<p><em>hi</em></p>");
	}

	#[rstest]
	#[case(EscapePolicy::Escape, "a &lt; b")]
	#[case(EscapePolicy::Raw, "a < b")]
	fn test_text(#[case] escape: EscapePolicy, #[case] expected: &str) {
		let markup = Markup::new(escape, QuoteStyle::Double);
		assert_eq!(markup.text("a < b"), expected);
	}

	#[rstest]
	fn test_from_settings() {
		let settings = RenderSettings::default().with_escape(EscapePolicy::Raw);
		let markup = Markup::from(&settings);
		assert_eq!(markup, Markup::RAW);
	}
}
