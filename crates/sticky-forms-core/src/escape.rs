//! HTML escaping utilities

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use sticky_forms_core::escape::escape_html;
///
/// let input = "<script>alert('XSS')</script>";
/// let escaped = escape_html(input);
/// assert_eq!(escaped, "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Escape HTML attribute values
///
/// Same as [`escape_html`], and additionally encodes line breaks so that an
/// attribute value always stays on one line.
///
/// # Examples
///
/// ```
/// use sticky_forms_core::escape::escape_html_attr;
///
/// let attr = r#"value" onload="alert('xss')"#;
/// let escaped = escape_html_attr(attr);
/// assert!(escaped.contains("&quot;"));
/// assert!(escaped.contains("&#x27;"));
/// ```
pub fn escape_html_attr(input: &str) -> String {
	escape_html(input)
		.replace('\n', "&#10;")
		.replace('\r', "&#13;")
}
