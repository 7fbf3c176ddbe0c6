//! Link resolution for the link helper

/// Maps application paths to URLs and reports the current request path
pub trait LinkResolver {
	/// Canonical URL for `path`
	fn resolve_link(&self, path: &str) -> String {
		path.to_string()
	}

	/// Path of the request being rendered, if known
	fn current_path(&self) -> Option<&str> {
		None
	}
}

/// Resolver that mounts relative paths under a fixed prefix
///
/// Absolute URLs (`http://`, `https://`, `//`) pass through unchanged.
///
/// # Examples
///
/// ```
/// use sticky_forms_helpers::{LinkResolver, PathResolver};
///
/// let resolver = PathResolver::new("/app").with_current_path("/app/users");
/// assert_eq!(resolver.resolve_link("users"), "/app/users");
/// assert_eq!(resolver.resolve_link("/users/"), "/app/users/");
/// assert_eq!(resolver.resolve_link("https://example.com"), "https://example.com");
/// assert_eq!(resolver.current_path(), Some("/app/users"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResolver {
	prefix: String,
	current: Option<String>,
}

impl PathResolver {
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into().trim_end_matches('/').to_string(),
			current: None,
		}
	}

	pub fn with_current_path(mut self, path: impl Into<String>) -> Self {
		self.current = Some(path.into());
		self
	}
}

impl LinkResolver for PathResolver {
	fn resolve_link(&self, path: &str) -> String {
		if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
			return path.to_string();
		}
		format!("{}/{}", self.prefix, path.trim_start_matches('/'))
	}

	fn current_path(&self) -> Option<&str> {
		self.current.as_deref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct Identity;

	impl LinkResolver for Identity {}

	#[rstest]
	fn test_default_resolver_is_identity() {
		assert_eq!(Identity.resolve_link("/about"), "/about");
		assert_eq!(Identity.current_path(), None);
	}

	#[rstest]
	#[case("", "about", "/about")]
	#[case("/", "/about", "/about")]
	#[case("/mount/", "about", "/mount/about")]
	#[case("/mount", "//cdn.example.com/x.js", "//cdn.example.com/x.js")]
	fn test_path_resolver(#[case] prefix: &str, #[case] path: &str, #[case] expected: &str) {
		assert_eq!(PathResolver::new(prefix).resolve_link(path), expected);
	}
}
