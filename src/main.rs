use leptos::prelude::*;

use portfolio_client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("portfolio client starting");
    mount_to_body(App);
}
