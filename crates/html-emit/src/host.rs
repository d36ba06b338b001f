//! The host bundler boundary.
//!
//! This crate does not own a compiler; it integrates with one. The types
//! here are the minimal read/write surface the plugin needs from a host
//! build: ordered entry points, a mutable artifact store, and a hook
//! registration point for the asset-emission phase. The host is always
//! passed in explicitly, never reached through global state, so the plugin
//! stays testable against a fake compiler.
//!
//! Hosts differ in how they signal hook completion. Older protocol versions
//! hand the hook an explicit [`Completion`] to call; newer ones await the
//! future returned by an async hook. [`EmitProtocol`] captures that
//! capability once, at registration time; the rendering core is identical
//! under both.

use std::borrow::Cow;

use anyhow::Result;
use async_trait::async_trait;
use futures::channel::oneshot;
use indexmap::IndexMap;

use crate::error::HostError;

/// A named unit of build output and the files it produced, in order.
///
/// Owned by the host build; read-only to plugins.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    name: String,
    files: Vec<String>,
}

impl EntryPoint {
    /// Create an entry point from its name and ordered output files.
    pub fn new(name: impl Into<String>, files: impl IntoIterator<Item = String>) -> Self {
        Self {
            name: name.into(),
            files: files.into_iter().collect(),
        }
    }

    /// Stable entry point name, used for chunk filtering.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Output file paths this entry produced, in emission order.
    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// One build pass: the current entry points plus the artifact store hooks
/// write into.
///
/// Constructed fresh by the host for every build (watch-mode hosts run many
/// over one [`Compiler`]); nothing in it survives across builds.
#[derive(Debug, Default)]
pub struct Compilation {
    entrypoints: Vec<EntryPoint>,
    assets: IndexMap<String, String>,
}

impl Compilation {
    /// A compilation over the given entry points, with an empty artifact
    /// store.
    pub fn new(entrypoints: Vec<EntryPoint>) -> Self {
        Self {
            entrypoints,
            assets: IndexMap::new(),
        }
    }

    /// Entry points in the host's natural order.
    pub fn entrypoints(&self) -> &[EntryPoint] {
        &self.entrypoints
    }

    /// Write `source` into the artifact store under `filename`, overwriting
    /// any prior artifact with the same name.
    pub fn emit_asset(&mut self, filename: impl Into<String>, source: String) {
        let filename = filename.into();
        tracing::debug!(filename = %filename, bytes = source.len(), "emitting asset");
        self.assets.insert(filename, source);
    }

    /// Look up an emitted artifact by name.
    pub fn asset(&self, filename: &str) -> Option<&str> {
        self.assets.get(filename).map(String::as_str)
    }

    /// All emitted artifacts, in emission order.
    pub fn assets(&self) -> &IndexMap<String, String> {
        &self.assets
    }
}

/// How the host expects emit hooks to signal completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitProtocol {
    /// The hook receives an explicit [`Completion`] and must call it once
    /// its artifacts are written.
    Callback,
    /// The hook is async; the host awaits the returned future.
    Promise,
}

/// One-shot completion handle for callback-protocol hooks.
///
/// Must be called exactly once, after the hook's artifact writes; the host
/// does not proceed until it fires.
pub struct Completion {
    tx: oneshot::Sender<Result<()>>,
}

impl Completion {
    fn new(tx: oneshot::Sender<Result<()>>) -> Self {
        Self { tx }
    }

    /// Signal the host that this hook is done, successfully or not.
    pub fn finish(self, result: Result<()>) {
        let _ = self.tx.send(result);
    }
}

/// Emit hook under the callback protocol.
pub trait CallbackEmitHook: Send + Sync {
    /// Hook name, for host diagnostics.
    fn name(&self) -> Cow<'static, str>;

    /// Run during asset emission. Implementations must call
    /// `done.finish(..)` exactly once, after writing their artifacts.
    fn emit(&self, compilation: &mut Compilation, done: Completion);
}

/// Emit hook under the promise protocol.
#[async_trait]
pub trait ProcessAssetsHook: Send + Sync {
    /// Hook name, for host diagnostics.
    fn name(&self) -> Cow<'static, str>;

    /// Run during asset emission; the host awaits the returned future
    /// before sealing the build.
    async fn process_assets(&self, compilation: &mut Compilation) -> Result<()>;
}

/// Minimal stand-in for the host bundler's registration surface.
///
/// Carries the detected [`EmitProtocol`] and the hooks registered for the
/// asset-emission phase. Production hosts provide their own equivalent; the
/// integration tests drive builds through this one.
pub struct Compiler {
    protocol: EmitProtocol,
    emit_hooks: Vec<Box<dyn CallbackEmitHook>>,
    process_assets_hooks: Vec<Box<dyn ProcessAssetsHook>>,
}

impl Compiler {
    /// A compiler advertising the given hook protocol.
    pub fn new(protocol: EmitProtocol) -> Self {
        Self {
            protocol,
            emit_hooks: Vec::new(),
            process_assets_hooks: Vec::new(),
        }
    }

    /// The hook-completion protocol this host supports.
    pub fn protocol(&self) -> EmitProtocol {
        self.protocol
    }

    /// Register a callback-protocol hook for the emission phase.
    pub fn tap_emit(&mut self, hook: Box<dyn CallbackEmitHook>) {
        tracing::debug!(hook = %hook.name(), "registered callback emit hook");
        self.emit_hooks.push(hook);
    }

    /// Register a promise-protocol hook for the emission phase.
    pub fn tap_process_assets(&mut self, hook: Box<dyn ProcessAssetsHook>) {
        tracing::debug!(hook = %hook.name(), "registered process-assets hook");
        self.process_assets_hooks.push(hook);
    }

    /// Drive every registered hook over `compilation`, in registration
    /// order. Callback hooks are waited on through their completion handle
    /// before the next hook runs; the first failure aborts the phase.
    pub async fn run_emit_phase(&self, compilation: &mut Compilation) -> Result<()> {
        for hook in &self.emit_hooks {
            let (tx, rx) = oneshot::channel();
            hook.emit(compilation, Completion::new(tx));
            rx.await.map_err(|_| HostError::CompletionDropped {
                hook: hook.name().into_owned(),
            })??;
        }

        for hook in &self.process_assets_hooks {
            hook.process_assets(compilation).await?;
        }

        Ok(())
    }
}
