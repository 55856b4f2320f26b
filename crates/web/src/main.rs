// =============================================================================
// Forsaj Web - Binary Entry Point
// =============================================================================
// Built by Trunk (see index.html, `data-bin="forsaj-web"`).
// =============================================================================

fn main() {
    console_error_panic_hook::set_once();
    // A second init (e.g. after `mount()`) returns Err; keep the first logger
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("forsaj.az frontend v{}", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(forsaj_web::App);
}
