/// Macros for timestamped console logging.
///
/// In the browser these write through `gloo_console`; on native targets
/// (unit tests, tooling) they are forwarded to `tracing` so that nothing
/// calls into JavaScript.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for ConsoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConsoleLevel::Debug => "DEBUG",
            ConsoleLevel::Info => "INFO",
            ConsoleLevel::Warn => "WARN",
            ConsoleLevel::Error => "ERROR",
        };
        f.write_str(label)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn emit(level: ConsoleLevel, message: String) {
    let line = format!("[{}] {}", js_sys::Date::now(), message);
    match level {
        ConsoleLevel::Debug => gloo_console::debug!(line),
        ConsoleLevel::Info => gloo_console::info!(line),
        ConsoleLevel::Warn => gloo_console::warn!(line),
        ConsoleLevel::Error => gloo_console::error!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn emit(level: ConsoleLevel, message: String) {
    match level {
        ConsoleLevel::Debug => tracing::debug!("{}", message),
        ConsoleLevel::Info => tracing::info!("{}", message),
        ConsoleLevel::Warn => tracing::warn!("{}", message),
        ConsoleLevel::Error => tracing::error!("{}", message),
    }
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Info,
            format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Warn,
            format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_error {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Error,
            format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::utils::console_macros::emit(
            $crate::utils::console_macros::ConsoleLevel::Debug,
            format!($($arg)*),
        )
    };
}
