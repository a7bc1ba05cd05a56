//! WASM entry point for the Leptos CSR app

use leptos::mount::mount_to_body;
use shiftboard_web::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("shiftboard starting");
    mount_to_body(App);
}
