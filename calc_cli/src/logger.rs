//! Leveled stderr logging with UTC timestamps.
//!
//! Stdout carries the wizard itself, so every log line goes to stderr.
//! `event!` traces (one per recomputation) are silent unless
//! `RCWIZ_LOG_EVENTS` is set.

use once_cell::sync::Lazy;

pub static EVENTS_ENABLED: Lazy<bool> = Lazy::new(|| std::env::var_os("RCWIZ_LOG_EVENTS").is_some());

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        eprintln!("\x1b[32m[INFO] [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("\x1b[35m[WARN] [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("\x1b[31m[ERROR][{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if *$crate::logger::EVENTS_ENABLED {
            eprintln!("\x1b[36m[EVENT][{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S"), format!($($arg)*))
        }
    };
}
