//! WASM-module loading strategy: compiles a manifest's `.wasm` module (streaming when
//! the host supports it), instantiates it with host-provided imports, and retrieves
//! its lifecycle exports.

use desktop_contract::manifest::{WasmConfig, WasmRenderMode};

use crate::error::LoaderError;
use crate::mount::{LoadState, MountedApp};

/// Lifecycle export names a conforming WASM module must expose, per `spec.md` §4.5.
pub const EXPORT_MOUNT: &str = "mount";
/// Lifecycle export names a conforming WASM module must expose.
pub const EXPORT_UNMOUNT: &str = "unmount";

/// Instantiates a WASM module, abstracting over whatever concrete
/// `WebAssembly.instantiateStreaming`/`instantiate` call the browser glue performs.
///
/// Mirrors [`crate::federated::FederatedFetcher`]'s role: keeps [`WasmLoader`]'s
/// lifecycle and render-mode bookkeeping unit-testable off-browser.
pub trait WasmInstantiator {
    /// Compiles and instantiates the module at `wasm_url`, using streaming
    /// compilation when `use_streaming` is true and the host supports it. Returns the
    /// export names the instantiated module exposes.
    fn instantiate(&self, wasm_url: &str, use_streaming: bool) -> Result<WasmInstanceHandle, LoaderError>;
}

/// Resolved handle to an instantiated WASM module instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasmInstanceHandle {
    /// Export names the instance exposes.
    pub exports: Vec<String>,
}

impl WasmInstanceHandle {
    fn has_export(&self, name: &str) -> bool {
        self.exports.iter().any(|e| e == name)
    }
}

/// Whether a host actually supports `WebAssembly.instantiateStreaming` (some hosts
/// expose the global but reject non-`application/wasm` responses; the concrete
/// feature-detect lives in `desktop_shell`'s browser glue). This pure helper only
/// resolves the manifest's *request* against that capability.
pub fn should_use_streaming(config: &WasmConfig, host_supports_streaming: bool) -> bool {
    config.streaming_compilation && host_supports_streaming
}

/// Surface a render mode exposes to the window chrome: which DOM scaffolding
/// (`<canvas>`, a plain container, or both) the shell must create before mounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSurface {
    /// Whether a `<canvas>` element must be created.
    pub needs_canvas: bool,
    /// Whether a DOM container element must be created.
    pub needs_dom_container: bool,
}

/// Resolves the DOM scaffolding a [`WasmRenderMode`] requires.
pub fn render_surface_for(mode: WasmRenderMode) -> RenderSurface {
    match mode {
        WasmRenderMode::Canvas2d => RenderSurface {
            needs_canvas: true,
            needs_dom_container: false,
        },
        WasmRenderMode::Dom => RenderSurface {
            needs_canvas: false,
            needs_dom_container: true,
        },
        WasmRenderMode::Hybrid => RenderSurface {
            needs_canvas: true,
            needs_dom_container: true,
        },
    }
}

/// WASM-strategy loader for a single app.
pub struct WasmLoader<T: WasmInstantiator> {
    config: WasmConfig,
    host_supports_streaming: bool,
    instantiator: T,
    instance: Option<WasmInstanceHandle>,
    state: LoadState,
}

impl<T: WasmInstantiator> WasmLoader<T> {
    /// Creates a loader for `config`, told whether the current host supports
    /// streaming compilation at all.
    pub fn new(config: WasmConfig, host_supports_streaming: bool, instantiator: T) -> Self {
        Self {
            config,
            host_supports_streaming,
            instantiator,
            instance: None,
            state: LoadState::Idle,
        }
    }

    /// The DOM surface this loader's render mode requires.
    pub fn render_surface(&self) -> RenderSurface {
        render_surface_for(self.config.render_mode)
    }

    /// Whether this mount attempt will use streaming compilation.
    pub fn will_use_streaming(&self) -> bool {
        should_use_streaming(&self.config, self.host_supports_streaming)
    }
}

impl<T: WasmInstantiator> MountedApp for WasmLoader<T> {
    fn state(&self) -> &LoadState {
        &self.state
    }

    fn mount(&mut self) -> Result<(), LoaderError> {
        match self.state {
            LoadState::Ready => return Ok(()),
            LoadState::Loading => return Err(LoaderError::AlreadyMounted),
            _ => {}
        }
        self.state = LoadState::Loading;
        let handle = match self.instantiator.instantiate(&self.config.wasm_url, self.will_use_streaming()) {
            Ok(handle) => handle,
            Err(err) => {
                self.state = LoadState::Error(err.clone());
                return Err(err);
            }
        };
        if !handle.has_export(EXPORT_MOUNT) {
            let err = LoaderError::MissingWasmExport(EXPORT_MOUNT.to_string());
            self.state = LoadState::Error(err.clone());
            return Err(err);
        }
        self.instance = Some(handle);
        self.state = LoadState::Ready;
        Ok(())
    }

    fn unmount(&mut self) {
        self.instance = None;
        self.state = LoadState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedInstantiator {
        exports: Vec<String>,
        fail: bool,
    }

    impl WasmInstantiator for FixedInstantiator {
        fn instantiate(&self, _wasm_url: &str, _use_streaming: bool) -> Result<WasmInstanceHandle, LoaderError> {
            if self.fail {
                return Err(LoaderError::FetchFailed("compile error".to_string()));
            }
            Ok(WasmInstanceHandle {
                exports: self.exports.clone(),
            })
        }
    }

    fn config(render_mode: WasmRenderMode, streaming: bool) -> WasmConfig {
        WasmConfig {
            wasm_url: "https://cdn/app.wasm".to_string(),
            js_glue_url: None,
            module_type: "esm".to_string(),
            render_mode,
            memory: None,
            streaming_compilation: streaming,
        }
    }

    #[test]
    fn streaming_requires_both_request_and_host_support() {
        assert!(should_use_streaming(&config(WasmRenderMode::Canvas2d, true), true));
        assert!(!should_use_streaming(&config(WasmRenderMode::Canvas2d, true), false));
        assert!(!should_use_streaming(&config(WasmRenderMode::Canvas2d, false), true));
    }

    #[test]
    fn hybrid_mode_needs_both_surfaces() {
        let surface = render_surface_for(WasmRenderMode::Hybrid);
        assert!(surface.needs_canvas && surface.needs_dom_container);
    }

    #[test]
    fn dom_mode_needs_only_container() {
        let surface = render_surface_for(WasmRenderMode::Dom);
        assert!(!surface.needs_canvas && surface.needs_dom_container);
    }

    #[test]
    fn mount_fails_without_the_mount_export() {
        let instantiator = FixedInstantiator {
            exports: vec![EXPORT_UNMOUNT.to_string()],
            fail: false,
        };
        let mut loader = WasmLoader::new(config(WasmRenderMode::Canvas2d, true), true, instantiator);
        let err = loader.mount().unwrap_err();
        assert_eq!(err, LoaderError::MissingWasmExport(EXPORT_MOUNT.to_string()));
    }

    #[test]
    fn mount_succeeds_with_both_lifecycle_exports() {
        let instantiator = FixedInstantiator {
            exports: vec![EXPORT_MOUNT.to_string(), EXPORT_UNMOUNT.to_string()],
            fail: false,
        };
        let mut loader = WasmLoader::new(config(WasmRenderMode::Canvas2d, true), true, instantiator);
        loader.mount().unwrap();
        assert_eq!(loader.state(), &LoadState::Ready);
    }
}
