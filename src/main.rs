use inventory_order_pwa::components::App;
use inventory_order_pwa::config::CONFIG;

fn main() {
    // Panics a la consola del navegador
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Inventory Order System starting... (env: {})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
