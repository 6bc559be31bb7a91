use oa_console::app::App;
use oa_console::config::CONFIG;
use oa_console::guard::{self, GuardDecision};

fn main() {
    console_error_panic_hook::set_once();

    let log_level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Error
    };
    wasm_logger::init(wasm_logger::Config::new(log_level));

    log::info!("🚀 Official Account Console starting ({})", CONFIG.environment);

    // Gate the whole app before mounting; the browser is navigating away
    // when the guard denies access.
    if guard::enforce() == GuardDecision::RedirectToLogin {
        return;
    }

    yew::Renderer::<App>::new().render();
}
