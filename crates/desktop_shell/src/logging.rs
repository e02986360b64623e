//! One-time logger/panic-hook installation (`SPEC_FULL.md` §2 "ambient logging"),
//! mirroring the teacher's `site::mount` pair of `console_error_panic_hook::set_once()`
//! + logger init calls at the top of a CSR entry point.

/// Installs `wasm_logger` and the panic hook on the browser target, or `env_logger`
/// on the native test/host target. Safe to call more than once; the underlying
/// loggers are themselves idempotent-init (`wasm_logger::init` / `env_logger::try_init`).
pub fn install() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = env_logger::try_init();
    }
}
