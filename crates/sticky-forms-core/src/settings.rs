//! Render settings
//!
//! Settings can be built in code or loaded from a TOML fragment:
//!
//! ```toml
//! escape = "raw"
//! quote = "single"
//! first_year = 1950
//! active_class = "current"
//! ```

use crate::error::TagResult;
use serde::{Deserialize, Serialize};

/// Whether attribute values and generated text are HTML-escaped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapePolicy {
	/// Escape every attribute value and generated text node
	///
	/// Attribute names are emitted as given and never escaped or validated;
	/// only trusted keys belong in an [`Attributes`](crate::Attributes) mapping.
	#[default]
	Escape,
	/// Interpolate values verbatim; the caller escapes untrusted input
	Raw,
}

/// Quote character wrapped around attribute values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
	#[default]
	Double,
	Single,
}

impl QuoteStyle {
	pub fn as_char(self) -> char {
		match self {
			QuoteStyle::Double => '"',
			QuoteStyle::Single => '\'',
		}
	}
}

/// Settings shared by every tag helper of a render call
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
	/// Escaping policy
	#[serde(default)]
	pub escape: EscapePolicy,

	/// Attribute quoting
	#[serde(default)]
	pub quote: QuoteStyle,

	/// First year offered by the default year picker
	#[serde(default = "default_first_year")]
	pub first_year: i32,

	/// Class appended to links pointing at the current path
	#[serde(default = "default_active_class")]
	pub active_class: String,
}

fn default_first_year() -> i32 {
	1940
}

fn default_active_class() -> String {
	"active".to_string()
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			escape: EscapePolicy::default(),
			quote: QuoteStyle::default(),
			first_year: default_first_year(),
			active_class: default_active_class(),
		}
	}
}

impl RenderSettings {
	/// Parse settings from a TOML document
	///
	/// Missing keys fall back to their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use sticky_forms_core::{EscapePolicy, RenderSettings};
	///
	/// let settings = RenderSettings::from_toml_str("escape = \"raw\"").unwrap();
	/// assert_eq!(settings.escape, EscapePolicy::Raw);
	/// assert_eq!(settings.first_year, 1940);
	/// ```
	pub fn from_toml_str(input: &str) -> TagResult<Self> {
		let settings: RenderSettings = toml::from_str(input)?;
		tracing::debug!(
			escape = ?settings.escape,
			quote = ?settings.quote,
			first_year = settings.first_year,
			"loaded render settings"
		);
		Ok(settings)
	}

	pub fn with_escape(mut self, escape: EscapePolicy) -> Self {
		self.escape = escape;
		self
	}

	pub fn with_quote(mut self, quote: QuoteStyle) -> Self {
		self.quote = quote;
		self
	}

	pub fn with_first_year(mut self, first_year: i32) -> Self {
		self.first_year = first_year;
		self
	}

	pub fn with_active_class(mut self, active_class: impl Into<String>) -> Self {
		self.active_class = active_class.into();
		self
	}
}
