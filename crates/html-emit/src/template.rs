//! Template rendering: the default document skeleton and the override seam.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use futures::future::BoxFuture;

use crate::attrs::{render_attributes, Attributes};
use crate::collect::AssetGroups;
use crate::refs::{css_references, js_references};

/// Everything a template needs to render one document.
///
/// Built fresh per build pass from the plugin options and the collected
/// asset groups; nothing here survives across builds.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Document title. Empty by default.
    pub title: String,
    /// Attributes on the root `<html>` tag.
    pub html_attributes: Attributes,
    /// Raw markup inserted in `<head>` before the generated style tags.
    pub head: String,
    /// Raw markup inserted in `<body>` before the generated script tags.
    pub body: String,
    /// Extra attributes on every generated `<link>` tag.
    pub css_attributes: Attributes,
    /// Extra attributes on every generated `<script>` tag.
    pub js_attributes: Attributes,
    /// Prefix applied to every asset URL.
    pub public_path: String,
    /// Entry point output files grouped by extension.
    pub assets: AssetGroups,
}

impl RenderContext {
    /// Collected `.css` output paths, in build order.
    pub fn css(&self) -> &[String] {
        self.assets.get("css").map(Vec::as_slice).unwrap_or(&[])
    }

    /// Collected `.js` output paths, in build order.
    pub fn js(&self) -> &[String] {
        self.assets.get("js").map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Future type returned by deferred templates.
pub type TemplateFuture = BoxFuture<'static, Result<String>>;

/// Rendering strategy for the emitted document.
///
/// The built-in skeleton can be replaced wholesale by a caller-supplied
/// function with the same input contract. A `Deferred` template resolves
/// asynchronously; the plugin waits for it before writing the artifact.
#[derive(Clone, Default)]
pub enum Template {
    /// The built-in skeleton, [`default_template`].
    #[default]
    BuiltIn,
    /// Synchronous custom template.
    Sync(Arc<dyn Fn(&RenderContext) -> Result<String> + Send + Sync>),
    /// Custom template whose result resolves asynchronously.
    Deferred(Arc<dyn Fn(RenderContext) -> TemplateFuture + Send + Sync>),
}

impl Template {
    /// Wrap a synchronous rendering function.
    pub fn sync<F>(template: F) -> Self
    where
        F: Fn(&RenderContext) -> Result<String> + Send + Sync + 'static,
    {
        Self::Sync(Arc::new(template))
    }

    /// Wrap a rendering function that returns its result deferred.
    pub fn deferred<F>(template: F) -> Self
    where
        F: Fn(RenderContext) -> TemplateFuture + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(template))
    }

    /// Render a document for `context`, awaiting a deferred result.
    ///
    /// Errors from custom templates propagate untranslated; the built-in
    /// template is infallible.
    pub async fn render(&self, context: RenderContext) -> Result<String> {
        match self {
            Self::BuiltIn => Ok(default_template(&context)),
            Self::Sync(template) => template(&context),
            Self::Deferred(template) => template(context).await,
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => f.write_str("Template::BuiltIn"),
            Self::Sync(_) => f.write_str("Template::Sync(..)"),
            Self::Deferred(_) => f.write_str("Template::Deferred(..)"),
        }
    }
}

/// Render the built-in document skeleton.
///
/// Produces `<!DOCTYPE html>`, a root `<html>` tag carrying the context's
/// attributes, a `<head>` with a UTF-8 charset meta tag, the title, the raw
/// head fragment and the generated style references, and a `<body>` with the
/// raw body fragment and the generated script references. No validation is
/// performed on the fragments.
pub fn default_template(context: &RenderContext) -> String {
    let html_attrs = render_attributes(&context.html_attributes);
    let css_tags = css_references(context.css(), &context.public_path, &context.css_attributes);
    let js_tags = js_references(context.js(), &context.public_path, &context.js_attributes);

    format!(
        r#"<!DOCTYPE html>
  <html{html_attrs}>
    <head>
      <meta charset="UTF-8">
      <title>{title}</title>
      {head}{css_tags}
    </head>
    <body>
      {body}{js_tags}
    </body>
  </html>"#,
        title = context.title,
        head = context.head,
        body = context.body,
    )
}
