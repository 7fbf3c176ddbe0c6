//! Attribute engine integration tests
//!
//! Property tests cover the serialization invariants for arbitrary mappings;
//! the table tests pin down the exact rendered strings.

use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;
use sticky_forms_core::{
	Attributes, EscapePolicy, Markup, QuoteStyle, RenderSettings, content_tag, tag, to_attributes,
};

fn key_strategy() -> impl Strategy<Value = String> {
	"[a-z][a-z0-9_]{0,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
	"[A-Za-z0-9 ._-]{0,12}"
}

fn scalar_mapping() -> impl Strategy<Value = Vec<(String, String)>> {
	proptest::collection::vec((key_strategy(), value_strategy()), 0..8).prop_map(|pairs| {
		let mut seen = std::collections::HashSet::new();
		pairs
			.into_iter()
			.filter(|(key, _)| seen.insert(key.clone()))
			.collect()
	})
}

proptest! {
	#[test]
	fn prop_scalar_mapping_renders_one_token_per_entry(pairs in scalar_mapping()) {
		let attrs: Attributes = pairs.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

		let expected = pairs
			.iter()
			.map(|(k, v)| format!("{}=\"{}\"", k, v))
			.collect::<Vec<_>>()
			.join(" ");

		prop_assert_eq!(to_attributes(&attrs), expected);
	}

	#[test]
	fn prop_true_flag_renders_bare_token(
		pairs in scalar_mapping(),
		flag in "[a-z]{3,10}",
	) {
		let attrs: Attributes = pairs
			.iter()
			.filter(|(k, _)| *k != flag)
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect();
		let attrs = attrs.flag(flag.clone(), true);

		let rendered = to_attributes(&attrs);
		let tokens: Vec<&str> = rendered.split(' ').collect();
		prop_assert!(tokens.contains(&flag.as_str()));
		let assignment = format!("{}=", flag);
		prop_assert!(!tokens.iter().any(|token| token.starts_with(&assignment)));
	}

	#[test]
	fn prop_nested_renders_compound_name(
		outer in key_strategy(),
		inner in key_strategy(),
		value in value_strategy(),
	) {
		let attrs = Attributes::new().nested(outer.clone(), [(inner.clone(), value.clone())]);
		let token = format!("{}-{}=\"{}\"", outer, inner, value);
		prop_assert_eq!(to_attributes(&attrs), token);
	}

	#[test]
	fn prop_escaped_output_never_contains_raw_markup(value in ".{0,24}") {
		let attrs = Attributes::new().attr("value", value);
		let rendered = Markup::default().attributes(&attrs);
		let inner = rendered
			.strip_prefix("value=\"")
			.and_then(|rest| rest.strip_suffix('"'))
			.unwrap_or_default();
		prop_assert!(!inner.contains('<'));
		prop_assert!(!inner.contains('>'));
		prop_assert!(!inner.contains('"'));
	}

	#[test]
	fn prop_rendering_is_deterministic(pairs in scalar_mapping()) {
		let attrs: Attributes = pairs.into_iter().collect();
		prop_assert_eq!(to_attributes(&attrs), to_attributes(&attrs.clone()));
	}
}

#[rstest]
fn test_mixed_mapping() {
	let attrs = Attributes::new()
		.attr("type", "checkbox")
		.attr("value", "true")
		.flag("checked", true)
		.nested("data", [("toggle", "switch"), ("size", "sm")]);

	assert_eq!(
		to_attributes(&attrs),
		r#"type="checkbox" value="true" checked data-toggle="switch" data-size="sm""#
	);
}

#[rstest]
fn test_json_boundary_to_markup() {
	let attrs = Attributes::try_from_json(&json!({
		"class": "wide",
		"maxlength": 40,
		"disabled": true,
		"placeholder": null,
		"aria": {"label": "Street", "hidden": false}
	}))
	.unwrap();

	assert_eq!(
		tag("input", &attrs),
		r#"<input class="wide" maxlength="40" disabled placeholder="" aria-label="Street" aria-hidden="">"#
	);
}

#[rstest]
#[case(EscapePolicy::Raw, QuoteStyle::Double, r#"<a title="R&D">R&D</a>"#)]
#[case(EscapePolicy::Escape, QuoteStyle::Double, r#"<a title="R&amp;D">R&D</a>"#)]
#[case(EscapePolicy::Escape, QuoteStyle::Single, "<a title='R&amp;D'>R&D</a>")]
fn test_markup_policies(
	#[case] escape: EscapePolicy,
	#[case] quote: QuoteStyle,
	#[case] expected: &str,
) {
	let settings = RenderSettings::default()
		.with_escape(escape)
		.with_quote(quote);
	let markup = Markup::from(&settings);
	let attrs = Attributes::new().attr("title", "R&D");

	assert_eq!(markup.content_tag("a", "R&D", &attrs), expected);
}

#[rstest]
fn test_content_tag_matches_open_and_close() {
	let attrs = Attributes::new().attr("name", "bio").attr("id", "bio");
	assert_eq!(
		content_tag("textarea", "hello", &attrs),
		r#"<textarea name="bio" id="bio">hello</textarea>"#
	);
}
