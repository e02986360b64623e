#[cfg(target_arch = "wasm32")]
fn main() {
    desktop_shell::logging::install();
    desktop_shell::theme::ThemeFacade.publish(desktop_shell::theme::Theme::Dark);
    log::info!("desktop shell booted on {}", platform_host_web::adapters::host_strategy_name());
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This binary targets wasm32-unknown-unknown; build with --target wasm32-unknown-unknown (bin: desktop_shell_app)");
}
