//! Console logging
//!
//! Browser builds write through `web_sys::console`; native builds (tests,
//! tooling) write to stderr so the same call sites work everywhere.

#[doc(hidden)]
pub fn write_info(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[ballpit] {msg}");
    }
}

#[doc(hidden)]
pub fn write_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("[ballpit] warning: {msg}");
    }
}

/// Info-level log line: `log_info!("spawned {} bodies", n)`
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::core::log::write_info(&format!($($arg)*))
    };
}

/// Warning-level log line
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::core::log::write_warn(&format!($($arg)*))
    };
}
