//! Browser console logging
//!
//! On wasm32 these forward to `console.log` / `console.warn` through web-sys.
//! Natively there is no console to talk to (and calling an imported JS
//! function would abort), so the macros only type-check their arguments.
//!
//! Usage:
//! ```rust
//! use potential_field_engine::console_log;
//!
//! let width = 40;
//! console_log!("loaded {}x{} map", width, 30);
//! ```

/// `console.log` with `format!` arguments
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// `console.warn` with `format!` arguments
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
