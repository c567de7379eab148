//! Console logging setup.
//!
//! Routes the `log` facade to the browser console and installs the panic hook
//! so Rust panics show up with a stack trace. Outside the browser build this
//! is a no-op.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Log level for the current build: `Debug` in debug builds, `Info` otherwise.
#[must_use]
pub fn level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "browser")]
    {
        console_error_panic_hook::set_once();
        match console_log::init_with_level(level()) {
            Ok(()) => log::debug!("console logger installed at {}", level()),
            Err(_) => log::debug!("console logger already installed"),
        }
    }
}
