//! Plugin configuration.

use serde::{Deserialize, Serialize};

use crate::attrs::{AttributeValue, Attributes};
use crate::template::Template;

/// Document-shaped context that flows into the template.
///
/// This is the data half of the configuration: it serializes, so hosts can
/// read it straight from their own config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentContext {
    /// Document title. Empty by default.
    pub title: String,
    /// Attributes on the root `<html>` tag. Defaults to `lang="en"`.
    pub html_attributes: Attributes,
    /// Raw markup inserted in `<head>` before the generated style tags.
    pub head: String,
    /// Raw markup inserted in `<body>` before the generated script tags.
    pub body: String,
    /// Extra attributes on every generated `<link>` tag.
    pub css_attributes: Attributes,
    /// Extra attributes on every generated `<script>` tag.
    pub js_attributes: Attributes,
}

impl Default for DocumentContext {
    fn default() -> Self {
        Self {
            title: String::new(),
            html_attributes: Attributes::from([(
                "lang".to_string(),
                AttributeValue::from("en"),
            )]),
            head: String::new(),
            body: String::new(),
            css_attributes: Attributes::new(),
            js_attributes: Attributes::new(),
        }
    }
}

/// Configuration for one [`HtmlEmitPlugin`](crate::HtmlEmitPlugin) instance.
///
/// Immutable for the lifetime of the plugin; every build pass reads the same
/// options. Construct with the `with_*` builder methods:
///
/// ```
/// use html_emit::HtmlEmitOptions;
///
/// let options = HtmlEmitOptions::new()
///     .with_filename("admin.html")
///     .with_public_path("/static/")
///     .with_chunks(["admin"])
///     .with_title("Admin");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlEmitOptions {
    /// Name of the emitted artifact. Defaults to `index.html`.
    pub filename: Option<String>,
    /// Prefix applied to every asset URL. Empty by default.
    pub public_path: String,
    /// Restrict asset collection to these entry point names. `None` (and an
    /// empty list) collects every entry.
    pub chunks: Option<Vec<String>>,
    /// Rendering strategy. Defaults to the built-in skeleton.
    pub template: Template,
    /// Context fields handed to the template.
    pub context: DocumentContext,
}

impl HtmlEmitOptions {
    /// Options with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved output filename (`index.html` when unset).
    pub fn filename(&self) -> &str {
        self.filename.as_deref().unwrap_or("index.html")
    }

    /// Set the output artifact name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the URL prefix applied to every asset reference.
    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.public_path = public_path.into();
        self
    }

    /// Restrict collection to the named entry points.
    pub fn with_chunks<I, S>(mut self, chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chunks = Some(chunks.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the built-in template.
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Replace the whole document context.
    pub fn with_context(mut self, context: DocumentContext) -> Self {
        self.context = context;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.context.title = title.into();
        self
    }

    /// Set the attributes on the root `<html>` tag.
    pub fn with_html_attributes(mut self, attributes: Attributes) -> Self {
        self.context.html_attributes = attributes;
        self
    }

    /// Set raw markup inserted in `<head>` before the generated style tags.
    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.context.head = head.into();
        self
    }

    /// Set raw markup inserted in `<body>` before the generated script tags.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.context.body = body.into();
        self
    }

    /// Set extra attributes on every generated `<link>` tag.
    pub fn with_css_attributes(mut self, attributes: Attributes) -> Self {
        self.context.css_attributes = attributes;
        self
    }

    /// Set extra attributes on every generated `<script>` tag.
    pub fn with_js_attributes(mut self, attributes: Attributes) -> Self {
        self.context.js_attributes = attributes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let options = HtmlEmitOptions::new();

        assert_eq!(options.filename(), "index.html");
        assert_eq!(options.public_path, "");
        assert!(options.chunks.is_none());
        assert_eq!(options.context.title, "");
        assert_eq!(
            options.context.html_attributes["lang"],
            AttributeValue::from("en")
        );
        assert!(options.context.css_attributes.is_empty());
        assert!(options.context.js_attributes.is_empty());
    }

    #[test]
    fn builder_sets_every_field() {
        let options = HtmlEmitOptions::new()
            .with_filename("pizza.html")
            .with_public_path("pizza/")
            .with_chunks(["index"])
            .with_title("Pizza")
            .with_head("<style></style>")
            .with_body("<div>Demo</div>");

        assert_eq!(options.filename(), "pizza.html");
        assert_eq!(options.public_path, "pizza/");
        assert_eq!(options.chunks.as_deref(), Some(&["index".to_string()][..]));
        assert_eq!(options.context.title, "Pizza");
        assert_eq!(options.context.head, "<style></style>");
        assert_eq!(options.context.body, "<div>Demo</div>");
    }

    #[test]
    fn document_context_round_trips_through_json() {
        let json = r#"{
            "title": "Pizza",
            "html_attributes": {"lang": "it"},
            "css_attributes": {"rel": "preload", "as": "style"},
            "js_attributes": {"defer": true}
        }"#;

        let context: DocumentContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.title, "Pizza");
        assert_eq!(context.html_attributes["lang"], AttributeValue::from("it"));
        assert_eq!(context.js_attributes["defer"], AttributeValue::Flag(true));
        assert_eq!(context.head, "");

        let back = serde_json::to_string(&context).unwrap();
        let again: DocumentContext = serde_json::from_str(&back).unwrap();
        assert_eq!(again.css_attributes, context.css_attributes);
    }
}
