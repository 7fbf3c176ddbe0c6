//! Option sets for select lists
//!
//! An [`OptionSet`] is an ordered list of label/value pairs. The canned sets
//! (months, days, years, states) start with a placeholder entry whose value is
//! empty.

use chrono::Datelike;
use std::ops::RangeInclusive;

const MONTH_NAMES: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// US state codes plus DC, sorted by code
pub const STATE_CODES: [&str; 51] = [
	"AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DC", "DE", "FL", "GA", "HI", "IA", "ID", "IL", "IN",
	"KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO", "MS", "MT", "NC", "ND", "NE", "NH", "NJ",
	"NM", "NV", "NY", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VA", "VT", "WA",
	"WI", "WV", "WY",
];

/// A visible label and the value submitted for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
	pub label: String,
	pub value: String,
}

impl OptionEntry {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}
}

/// Ordered option entries; iteration order is render order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
	entries: Vec<OptionEntry>,
}

impl OptionSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a set from `(label, value)` pairs
	///
	/// # Examples
	///
	/// ```
	/// use sticky_forms_helpers::OptionSet;
	///
	/// let set = OptionSet::from_pairs([("Monday", "monday"), ("MY DAY!", "myday")]);
	/// assert_eq!(set.len(), 2);
	/// assert_eq!(set.entries()[1].value, "myday");
	/// ```
	pub fn from_pairs<I, L, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (L, V)>,
		L: Into<String>,
		V: Into<String>,
	{
		Self {
			entries: pairs
				.into_iter()
				.map(|(label, value)| OptionEntry::new(label, value))
				.collect(),
		}
	}

	/// Append an entry
	pub fn push(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
		self.entries.push(OptionEntry::new(label, value));
		self
	}

	pub fn entries(&self) -> &[OptionEntry] {
		&self.entries
	}

	pub fn iter(&self) -> std::slice::Iter<'_, OptionEntry> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn placeholder(label: &str) -> Self {
		Self::new().push(label, "")
	}

	/// `Month` placeholder followed by `"1 - January"`/`"01"` … `"12 - December"`/`"12"`
	pub fn months() -> Self {
		MONTH_NAMES
			.iter()
			.enumerate()
			.fold(Self::placeholder("Month"), |set, (index, name)| {
				let number = index + 1;
				set.push(format!("{} - {}", number, name), format!("{:02}", number))
			})
	}

	/// `Day` placeholder followed by `1` … `31`
	pub fn days() -> Self {
		(1..=31).fold(Self::placeholder("Day"), |set, day: u32| {
			set.push(day.to_string(), day.to_string())
		})
	}

	/// `Year` placeholder followed by every year of `range`
	///
	/// Years run from `range.end()` toward `range.start()`: descending for an
	/// increasing range, ascending when the bounds are reversed.
	///
	/// # Examples
	///
	/// ```
	/// use sticky_forms_helpers::OptionSet;
	///
	/// let values: Vec<String> = OptionSet::years(2000..=2002)
	/// 	.iter()
	/// 	.map(|entry| entry.value.clone())
	/// 	.collect();
	/// assert_eq!(values, vec!["", "2002", "2001", "2000"]);
	/// ```
	pub fn years(range: RangeInclusive<i32>) -> Self {
		let (start, end) = (*range.start(), *range.end());
		let years: Vec<i32> = if end >= start {
			(start..=end).rev().collect()
		} else {
			(end..=start).collect()
		};

		years.into_iter().fold(Self::placeholder("Year"), |set, year| {
			set.push(year.to_string(), year.to_string())
		})
	}

	/// Years from `first_year` through the current calendar year
	///
	/// Computed on every call so a long-running process picks up the new year.
	pub fn years_since(first_year: i32) -> Self {
		Self::years(first_year..=current_year())
	}

	/// `State` placeholder followed by [`STATE_CODES`]
	pub fn states() -> Self {
		STATE_CODES
			.iter()
			.fold(Self::placeholder("State"), |set, code| set.push(*code, *code))
	}
}

pub(crate) fn current_year() -> i32 {
	chrono::Local::now().year()
}

impl<'a> IntoIterator for &'a OptionSet {
	type Item = &'a OptionEntry;
	type IntoIter = std::slice::Iter<'a, OptionEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for OptionSet {
	fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
		Self::from_pairs(iter)
	}
}
