//! Attribute mappings
//!
//! [`Attributes`] is an insertion-ordered mapping from attribute name to
//! [`AttrValue`]. A value is either plain text, a boolean flag (rendered as a
//! bare token such as `checked`), or a single-level nested mapping that is
//! flattened into `outer-inner="value"` tokens (the `data-*` convention).
//!
//! All combinators return new mappings; a caller's mapping is never modified
//! by the tag helpers.

use crate::error::{TagError, TagResult, json_kind};
use indexmap::IndexMap;
use serde_json::Value;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// Rendered as `name="value"`
	Text(String),
	/// Rendered as a bare `name` token
	Flag,
	/// Rendered as one `name-key="value"` token per entry
	Nested(IndexMap<String, String>),
}

impl AttrValue {
	/// String form used when comparing against submitted values.
	///
	/// # Examples
	///
	/// ```
	/// use sticky_forms_core::AttrValue;
	///
	/// assert_eq!(AttrValue::from("red").as_compare_str(), "red");
	/// assert_eq!(AttrValue::from(7).as_compare_str(), "7");
	/// assert_eq!(AttrValue::Flag.as_compare_str(), "true");
	/// ```
	pub fn as_compare_str(&self) -> &str {
		match self {
			AttrValue::Text(text) => text,
			AttrValue::Flag => "true",
			AttrValue::Nested(_) => "",
		}
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_string())
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Text(value.clone())
	}
}

macro_rules! impl_from_integer {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Text(value.to_string())
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<IndexMap<String, String>> for AttrValue {
	fn from(value: IndexMap<String, String>) -> Self {
		AttrValue::Nested(value)
	}
}

/// Ordered attribute mapping
///
/// # Examples
///
/// ```
/// use sticky_forms_core::{Attributes, to_attributes};
///
/// let attrs = Attributes::new()
/// 	.attr("type", "text")
/// 	.flag("required", true)
/// 	.data("role", "search");
///
/// assert_eq!(
/// 	to_attributes(&attrs),
/// 	r#"type="text" required data-role="search""#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: IndexMap<String, AttrValue>,
}

impl Attributes {
	/// Create an empty mapping
	pub fn new() -> Self {
		Self {
			entries: IndexMap::new(),
		}
	}

	/// Set an attribute, replacing any previous value in place
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.entries.insert(key.into(), value.into());
		self
	}

	/// Set a boolean attribute
	///
	/// `true` inserts a bare flag; `false` leaves the mapping untouched.
	pub fn flag(mut self, key: impl Into<String>, on: bool) -> Self {
		if on {
			self.entries.insert(key.into(), AttrValue::Flag);
		}
		self
	}

	/// Add entries to a nested mapping, creating it if needed
	///
	/// A non-nested value already stored under `outer` is replaced.
	pub fn nested<I, K, V>(mut self, outer: impl Into<String>, pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let slot = self
			.entries
			.entry(outer.into())
			.or_insert_with(|| AttrValue::Nested(IndexMap::new()));
		if !matches!(slot, AttrValue::Nested(_)) {
			*slot = AttrValue::Nested(IndexMap::new());
		}
		if let AttrValue::Nested(inner) = slot {
			for (key, value) in pairs {
				inner.insert(key.into(), value.into());
			}
		}
		self
	}

	/// Add a `data-*` attribute
	pub fn data(self, key: impl Into<String>, value: impl Into<String>) -> Self {
		let pair: (String, String) = (key.into(), value.into());
		self.nested("data", [pair])
	}

	/// Append a CSS class to the `class` attribute
	pub fn class(mut self, value: impl Into<String>) -> Self {
		let value = value.into();
		match self.entries.get_mut("class") {
			Some(AttrValue::Text(existing)) if !existing.is_empty() => {
				existing.push(' ');
				existing.push_str(&value);
			}
			_ => {
				self.entries.insert("class".to_string(), AttrValue::Text(value));
			}
		}
		self
	}

	/// Insert a value, returning the previous one
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<AttrValue>,
	) -> Option<AttrValue> {
		self.entries.insert(key.into(), value.into())
	}

	pub fn get(&self, key: &str) -> Option<&AttrValue> {
		self.entries.get(key)
	}

	/// String form of the value stored under `key`
	pub fn value_str(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(AttrValue::as_compare_str)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> indexmap::map::Iter<'_, String, AttrValue> {
		self.entries.iter()
	}

	/// Copy of this mapping without the given keys, order preserved
	pub fn without(&self, keys: &[&str]) -> Self {
		self.entries
			.iter()
			.filter(|(key, _)| !keys.contains(&key.as_str()))
			.map(|(key, value)| (key.clone(), value.clone()))
			.collect()
	}

	/// Remove `key`, returning its value and the remaining mapping
	pub fn take(mut self, key: &str) -> (Option<AttrValue>, Self) {
		let value = self.entries.shift_remove(key);
		(value, self)
	}

	/// Shallow merge where `overrides` wins on key collision
	///
	/// Keys that exist in `defaults` keep their position; keys only present in
	/// `overrides` are appended in their own order.
	///
	/// # Examples
	///
	/// ```
	/// use sticky_forms_core::{Attributes, to_attributes};
	///
	/// let defaults = Attributes::new().attr("type", "text").attr("name", "q");
	/// let overrides = Attributes::new().attr("class", "wide").attr("type", "search");
	///
	/// let merged = Attributes::merged(&defaults, &overrides);
	/// assert_eq!(to_attributes(&merged), r#"type="search" name="q" class="wide""#);
	/// ```
	pub fn merged(defaults: &Attributes, overrides: &Attributes) -> Attributes {
		let mut entries = defaults.entries.clone();
		for (key, value) in &overrides.entries {
			entries.insert(key.clone(), value.clone());
		}
		Attributes { entries }
	}

	/// Coerce an untyped JSON object into an attribute mapping
	///
	/// Strings and numbers become text, `true` becomes a flag, `false` and
	/// `null` become empty text, and objects of scalars become nested
	/// mappings. Arrays and deeper objects are rejected.
	///
	/// # Examples
	///
	/// ```
	/// use sticky_forms_core::{Attributes, to_attributes};
	/// use serde_json::json;
	///
	/// let attrs = Attributes::try_from_json(&json!({
	/// 	"value": 3,
	/// 	"checked": true,
	/// 	"data": {"id": "42"}
	/// }))
	/// .unwrap();
	///
	/// assert_eq!(to_attributes(&attrs), r#"value="3" checked data-id="42""#);
	/// ```
	pub fn try_from_json(value: &Value) -> TagResult<Self> {
		let Value::Object(object) = value else {
			return Err(TagError::InvalidRoot(json_kind(value)));
		};

		let mut attrs = Attributes::new();
		for (key, value) in object {
			let converted = match value {
				Value::Bool(true) => AttrValue::Flag,
				Value::Object(inner) => {
					let mut nested = IndexMap::with_capacity(inner.len());
					for (inner_key, inner_value) in inner {
						let text = scalar_text(inner_value).ok_or_else(|| {
							reject(format!("{}-{}", key, inner_key), inner_value)
						})?;
						nested.insert(inner_key.clone(), text);
					}
					AttrValue::Nested(nested)
				}
				other => {
					let text = scalar_text(other).ok_or_else(|| reject(key.clone(), other))?;
					AttrValue::Text(text)
				}
			};
			attrs.entries.insert(key.clone(), converted);
		}
		Ok(attrs)
	}
}

fn scalar_text(value: &Value) -> Option<String> {
	match value {
		Value::Null | Value::Bool(false) => Some(String::new()),
		Value::Bool(true) => Some("true".to_string()),
		Value::Number(number) => Some(number.to_string()),
		Value::String(text) => Some(text.clone()),
		Value::Array(_) | Value::Object(_) => None,
	}
}

fn reject(key: String, value: &Value) -> TagError {
	let kind = json_kind(value);
	tracing::debug!(key = %key, kind, "rejecting attribute value");
	TagError::UnsupportedValue { key, kind }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Attributes {
	type Item = (&'a String, &'a AttrValue);
	type IntoIter = indexmap::map::Iter<'a, String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl TryFrom<&Value> for Attributes {
	type Error = TagError;

	fn try_from(value: &Value) -> TagResult<Self> {
		Attributes::try_from_json(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_attr_replaces_in_place() {
		let attrs = Attributes::new()
			.attr("a", "1")
			.attr("b", "2")
			.attr("a", "3");

		let keys: Vec<&str> = attrs.iter().map(|(key, _)| key.as_str()).collect();
		assert_eq!(keys, vec!["a", "b"]);
		assert_eq!(attrs.value_str("a"), Some("3"));
	}

	#[rstest]
	#[case(true, true)]
	#[case(false, false)]
	fn test_flag(#[case] on: bool, #[case] present: bool) {
		let attrs = Attributes::new().flag("checked", on);
		assert_eq!(attrs.contains_key("checked"), present);
	}

	#[rstest]
	fn test_data_accumulates_in_one_nested_map() {
		let attrs = Attributes::new().data("id", "7").data("kind", "user");

		let Some(AttrValue::Nested(inner)) = attrs.get("data") else {
			panic!("expected nested data attribute");
		};
		assert_eq!(inner.len(), 2);
		assert_eq!(inner.get("kind").map(String::as_str), Some("user"));
	}

	#[rstest]
	fn test_nested_replaces_scalar() {
		let attrs = Attributes::new()
			.attr("aria", "x")
			.nested("aria", [("label", "Search")]);
		assert!(matches!(attrs.get("aria"), Some(AttrValue::Nested(_))));
	}

	#[rstest]
	fn test_class_appends() {
		let attrs = Attributes::new().class("form-control").class("is-valid");
		assert_eq!(attrs.value_str("class"), Some("form-control is-valid"));
	}

	#[rstest]
	fn test_merged_does_not_touch_inputs() {
		let defaults = Attributes::new().attr("type", "text");
		let overrides = Attributes::new().attr("type", "radio").flag("checked", true);

		let merged = Attributes::merged(&defaults, &overrides);

		assert_eq!(defaults.value_str("type"), Some("text"));
		assert_eq!(overrides.len(), 2);
		assert_eq!(merged.value_str("type"), Some("radio"));
		assert!(merged.contains_key("checked"));
	}

	#[rstest]
	fn test_take_preserves_remaining_order() {
		let attrs = Attributes::new()
			.attr("key", "Large")
			.attr("value", "L")
			.attr("class", "opt");

		let (label, rest) = attrs.take("key");

		assert_eq!(label, Some(AttrValue::from("Large")));
		let keys: Vec<&str> = rest.iter().map(|(key, _)| key.as_str()).collect();
		assert_eq!(keys, vec!["value", "class"]);
	}

	#[rstest]
	fn test_without() {
		let attrs = Attributes::new().attr("default", "M").attr("class", "x");
		let rest = attrs.without(&["default"]);
		assert!(!rest.contains_key("default"));
		assert!(attrs.contains_key("default"));
	}

	#[rstest]
	#[case(json!("red"), AttrValue::from("red"))]
	#[case(json!(12), AttrValue::from("12"))]
	#[case(json!(true), AttrValue::Flag)]
	#[case(json!(false), AttrValue::from(""))]
	#[case(json!(null), AttrValue::from(""))]
	fn test_try_from_json_scalars(#[case] input: Value, #[case] expected: AttrValue) {
		let attrs = Attributes::try_from_json(&json!({ "v": input })).unwrap();
		assert_eq!(attrs.get("v"), Some(&expected));
	}

	#[rstest]
	fn test_try_from_json_rejects_arrays() {
		let err = Attributes::try_from_json(&json!({ "class": ["a", "b"] })).unwrap_err();
		assert!(matches!(
			err,
			TagError::UnsupportedValue { ref key, kind: "array" } if key == "class"
		));
	}

	#[rstest]
	fn test_try_from_json_rejects_deep_nesting() {
		let err = Attributes::try_from_json(&json!({ "data": { "a": { "b": 1 } } })).unwrap_err();
		assert!(matches!(
			err,
			TagError::UnsupportedValue { ref key, kind: "object" } if key == "data-a"
		));
	}

	#[rstest]
	fn test_try_from_json_rejects_non_object_root() {
		let err = Attributes::try_from_json(&json!("nope")).unwrap_err();
		assert!(matches!(err, TagError::InvalidRoot("string")));
	}
}
