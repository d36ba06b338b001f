//! The plugin controller: collect, render, emit.

use std::borrow::Cow;

use anyhow::Result;
use async_trait::async_trait;

use crate::collect::collect_assets;
use crate::config::HtmlEmitOptions;
use crate::host::{CallbackEmitHook, Compilation, Compiler, Completion, EmitProtocol, ProcessAssetsHook};
use crate::template::RenderContext;

/// Emits one HTML document per build pass, referencing the build's output
/// assets.
///
/// Each instance manages exactly one named artifact. Several instances with
/// distinct filenames can attach to the same build, each scoped to its own
/// chunk subset:
///
/// ```
/// use html_emit::{Compiler, EmitProtocol, HtmlEmitOptions, HtmlEmitPlugin};
///
/// let mut compiler = Compiler::new(EmitProtocol::Promise);
/// HtmlEmitPlugin::new(HtmlEmitOptions::new().with_chunks(["index"])).apply(&mut compiler);
/// HtmlEmitPlugin::new(
///     HtmlEmitOptions::new()
///         .with_filename("another.html")
///         .with_chunks(["another"]),
/// )
/// .apply(&mut compiler);
/// ```
#[derive(Debug)]
pub struct HtmlEmitPlugin {
    options: HtmlEmitOptions,
}

impl HtmlEmitPlugin {
    /// A plugin rendering with the given options.
    pub fn new(options: HtmlEmitOptions) -> Self {
        Self { options }
    }

    /// The options this instance was constructed with.
    pub fn options(&self) -> &HtmlEmitOptions {
        &self.options
    }

    /// Attach to a build: register for the host's asset-emission phase
    /// under whichever completion protocol the host advertises. The
    /// rendering logic is identical under both.
    pub fn apply(self, compiler: &mut Compiler) {
        match compiler.protocol() {
            EmitProtocol::Callback => compiler.tap_emit(Box::new(self)),
            EmitProtocol::Promise => compiler.tap_process_assets(Box::new(self)),
        }
    }

    /// One build pass: group the current entry point outputs by extension,
    /// render the template (waiting if it resolves deferred), and write the
    /// document into the artifact store under the configured filename.
    ///
    /// Template failures propagate untranslated; the host fails the build
    /// with the original error.
    async fn execute(&self, compilation: &mut Compilation) -> Result<()> {
        let assets = collect_assets(compilation.entrypoints(), self.options.chunks.as_deref());

        let context = RenderContext {
            title: self.options.context.title.clone(),
            html_attributes: self.options.context.html_attributes.clone(),
            head: self.options.context.head.clone(),
            body: self.options.context.body.clone(),
            css_attributes: self.options.context.css_attributes.clone(),
            js_attributes: self.options.context.js_attributes.clone(),
            public_path: self.options.public_path.clone(),
            assets,
        };

        let source = self.options.template.render(context).await?;
        compilation.emit_asset(self.options.filename(), source);
        Ok(())
    }
}

const PLUGIN_NAME: &str = "html-emit";

impl CallbackEmitHook for HtmlEmitPlugin {
    fn name(&self) -> Cow<'static, str> {
        PLUGIN_NAME.into()
    }

    fn emit(&self, compilation: &mut Compilation, done: Completion) {
        // The completion handle fires only after the artifact write; the
        // template future is resolved in place since the host gives this
        // protocol no way to suspend.
        let result = futures::executor::block_on(self.execute(compilation));
        done.finish(result);
    }
}

#[async_trait]
impl ProcessAssetsHook for HtmlEmitPlugin {
    fn name(&self) -> Cow<'static, str> {
        PLUGIN_NAME.into()
    }

    async fn process_assets(&self, compilation: &mut Compilation) -> Result<()> {
        self.execute(compilation).await
    }
}
