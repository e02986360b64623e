//! Loader-wide error type.

/// Failure mounting or communicating with a remote app, regardless of strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoaderError {
    /// The manifest declared a sandbox config with a disallowed URL scheme.
    #[error("sandbox url `{0}` must use http: or https:")]
    DisallowedScheme(String),
    /// The remote entry/module URL could not be fetched or instantiated.
    #[error("failed to load remote module: {0}")]
    FetchFailed(String),
    /// A federated module export did not match the manifest's declared entrypoint.
    #[error("federated module has no export named `{0}`")]
    MissingEntrypoint(String),
    /// A WASM module did not export the expected lifecycle function.
    #[error("wasm module has no export named `{0}`")]
    MissingWasmExport(String),
    /// The app was asked to mount twice without an intervening unmount.
    #[error("app is already mounted")]
    AlreadyMounted,
    /// Retry was requested on an app that was never unmounted.
    #[error("cannot retry while still mounted")]
    StillMounted,
}
