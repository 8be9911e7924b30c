#![recursion_limit = "256"]

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod icons;
pub mod view_state;

/// Browser console log level: debug traces only in debug builds.
pub fn console_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // errors if a logger is already installed (hot reload)
    let _ = console_log::init_with_level(console_log_level());
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_log_level() {
        let level = console_log_level();
        if cfg!(debug_assertions) {
            assert_eq!(level, log::Level::Debug);
        } else {
            assert_eq!(level, log::Level::Info);
        }
        assert!(level >= log::Level::Info);
    }
}
