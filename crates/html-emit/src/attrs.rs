//! HTML attribute serialization.
//!
//! Attribute maps are insertion-ordered: the order attributes are added is
//! the order they appear in the rendered markup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered mapping of attribute name to value.
pub type Attributes = IndexMap<String, AttributeValue>;

/// Value of a single HTML attribute.
///
/// A `Flag(true)` renders as a bare boolean attribute (`defer`), everything
/// else renders as `name="value"`. Deserializes untagged, so JSON/TOML
/// contexts can write `{"defer": true, "rel": "preload"}` directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean attribute. Only the literal `true` renders as a bare name;
    /// `false` renders as `name="false"`.
    Flag(bool),
    /// Plain text value, rendered as `name="value"`.
    Text(String),
}

impl From<bool> for AttributeValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Render an attribute map as an HTML tag fragment.
///
/// An empty map renders as the empty string. A non-empty map renders with a
/// single leading space, entries joined by single spaces in insertion order:
///
/// ```
/// use html_emit::{render_attributes, AttributeValue, Attributes};
///
/// let attrs = Attributes::from([
///     ("rel".to_string(), AttributeValue::from("preload")),
///     ("defer".to_string(), AttributeValue::from(true)),
/// ]);
/// assert_eq!(render_attributes(&attrs), r#" rel="preload" defer"#);
/// ```
///
/// Values are inserted verbatim. No HTML escaping is performed: callers are
/// trusted to supply safe strings.
pub fn render_attributes(attributes: &Attributes) -> String {
    if attributes.is_empty() {
        return String::new();
    }

    let rendered: Vec<String> = attributes
        .iter()
        .map(|(name, value)| match value {
            AttributeValue::Flag(true) => name.clone(),
            AttributeValue::Flag(false) => format!(r#"{name}="false""#),
            AttributeValue::Text(text) => format!(r#"{name}="{text}""#),
        })
        .collect();

    format!(" {}", rendered.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_renders_empty_string() {
        assert_eq!(render_attributes(&Attributes::new()), "");
    }

    #[test]
    fn true_flag_renders_bare_name() {
        let attrs = Attributes::from([("defer".to_string(), AttributeValue::from(true))]);
        assert_eq!(render_attributes(&attrs), " defer");
    }

    #[test]
    fn false_flag_renders_quoted_false() {
        let attrs = Attributes::from([("async".to_string(), AttributeValue::from(false))]);
        assert_eq!(render_attributes(&attrs), r#" async="false""#);
    }

    #[test]
    fn text_values_render_in_insertion_order() {
        let attrs = Attributes::from([
            ("rel".to_string(), AttributeValue::from("preload")),
            ("as".to_string(), AttributeValue::from("style")),
        ]);
        assert_eq!(render_attributes(&attrs), r#" rel="preload" as="style""#);
    }

    #[test]
    fn values_are_not_escaped() {
        let attrs = Attributes::from([(
            "data-raw".to_string(),
            AttributeValue::from("<unescaped>"),
        )]);
        assert_eq!(render_attributes(&attrs), r#" data-raw="<unescaped>""#);
    }

    #[test]
    fn deserializes_untagged_from_json() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"rel": "preload", "defer": true}"#).unwrap();
        assert_eq!(attrs["rel"], AttributeValue::from("preload"));
        assert_eq!(attrs["defer"], AttributeValue::Flag(true));
        assert_eq!(render_attributes(&attrs), r#" rel="preload" defer"#);
    }
}
