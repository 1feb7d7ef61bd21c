//! Console logging
//!
//! Routes through `web_sys::console` on wasm32. Off wasm the browser console
//! does not exist, so these calls compile to no-ops (native tests included).

#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        console::warn_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}
