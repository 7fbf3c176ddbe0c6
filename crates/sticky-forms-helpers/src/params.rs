//! Submitted parameter snapshots
//!
//! Tag helpers never reach for ambient request state. Each render call is
//! handed a [`SubmittedParams`] implementation: usually the request's parsed
//! query/form map, or an owned [`QueryParams`] snapshot.

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use sticky_forms_core::TagResult;

/// Read-only lookup of the current request's submitted values
pub trait SubmittedParams {
	/// The submitted value for `name`, if any
	fn submitted_value(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> SubmittedParams for HashMap<String, String, S> {
	fn submitted_value(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

impl SubmittedParams for BTreeMap<String, String> {
	fn submitted_value(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

impl<S: BuildHasher> SubmittedParams for IndexMap<String, String, S> {
	fn submitted_value(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

impl<T: SubmittedParams + ?Sized> SubmittedParams for &T {
	fn submitted_value(&self, name: &str) -> Option<&str> {
		(**self).submitted_value(name)
	}
}

impl<T: SubmittedParams + ?Sized> SubmittedParams for Box<T> {
	fn submitted_value(&self, name: &str) -> Option<&str> {
		(**self).submitted_value(name)
	}
}

/// Owned snapshot of url-encoded parameters
///
/// # Examples
///
/// ```
/// use sticky_forms_helpers::{QueryParams, SubmittedParams};
///
/// let params = QueryParams::from_urlencoded("?color=red&size=L&note=a%20b").unwrap();
/// assert_eq!(params.submitted_value("color"), Some("red"));
/// assert_eq!(params.submitted_value("note"), Some("a b"));
/// assert_eq!(params.submitted_value("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
	values: IndexMap<String, String>,
}

impl QueryParams {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse an `application/x-www-form-urlencoded` string
	///
	/// A leading `?` is ignored. When a key repeats, the last value wins.
	pub fn from_urlencoded(input: &str) -> TagResult<Self> {
		let input = input.strip_prefix('?').unwrap_or(input);
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(input)?;
		Ok(pairs.into_iter().collect())
	}

	/// Add or replace a value
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.values.insert(name.into(), value.into());
		self
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		}
	}
}

impl SubmittedParams for QueryParams {
	fn submitted_value(&self, name: &str) -> Option<&str> {
		self.get(name)
	}
}
