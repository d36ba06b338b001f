//! # html-emit
//!
//! Bundler plugin that emits an HTML document referencing the build's
//! output assets: entry point output files are grouped by extension and
//! interpolated into a template as `<link>` and `<script>` references, and
//! the rendered document is registered as a build artifact.
//!
//! The plugin renders once per build pass. Everything is synchronous except
//! one seam: a custom [`Template`] may resolve its result deferred, and the
//! artifact write waits for it.
//!
//! ## Quick start
//!
//! ```
//! use html_emit::{Compilation, Compiler, EmitProtocol, EntryPoint, HtmlEmitOptions, HtmlEmitPlugin};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let mut compiler = Compiler::new(EmitProtocol::Promise);
//! HtmlEmitPlugin::new(HtmlEmitOptions::new().with_title("App")).apply(&mut compiler);
//!
//! let mut compilation = Compilation::new(vec![EntryPoint::new(
//!     "main",
//!     ["main.js".to_string(), "main.css".to_string()],
//! )]);
//! compiler.run_emit_phase(&mut compilation).await?;
//!
//! let html = compilation.asset("index.html").expect("emitted document");
//! assert!(html.contains(r#"<script src="main.js"></script>"#));
//! # Ok(()) }
//! ```
//!
//! ## Custom templates
//!
//! A template override replaces the built-in skeleton entirely. The
//! generated pieces stay available for composition:
//!
//! ```
//! use html_emit::{js_references, HtmlEmitOptions, Template};
//!
//! let options = HtmlEmitOptions::new().with_template(Template::sync(|context| {
//!     let scripts = js_references(context.js(), &context.public_path, &context.js_attributes);
//!     Ok(format!("<body>{scripts}</body>"))
//! }));
//! # let _ = options;
//! ```
//!
//! Attribute values and markup fragments are inserted verbatim — the plugin
//! performs no HTML escaping. Callers own the safety of what they configure.
//!
//! This crate emits `tracing` events and installs no subscriber.

pub mod attrs;
pub mod collect;
pub mod config;
pub mod error;
pub mod host;
pub mod plugin;
pub mod refs;
pub mod template;

pub use attrs::{render_attributes, AttributeValue, Attributes};
pub use collect::{collect_assets, AssetGroups};
pub use config::{DocumentContext, HtmlEmitOptions};
pub use error::HostError;
pub use host::{
    CallbackEmitHook, Compilation, Compiler, Completion, EmitProtocol, EntryPoint,
    ProcessAssetsHook,
};
pub use plugin::HtmlEmitPlugin;
pub use refs::{css_references, js_references};
pub use template::{default_template, RenderContext, Template, TemplateFuture};
