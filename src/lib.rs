//! Python-style performance logging for Rust functions.
//!
//! Every decorated call is timed against **process CPU time** and reported as
//! one `tracing` record of the form `Ran in: <seconds>s. Result: <value>`,
//! with the return value replaced by a `<NULL>` placeholder unless result
//! printing is enabled. Decoration comes in two flavors:
//!
//! - the runtime wrappers in [`measure`] ([`perf_log`], [`perf_log_config`],
//!   [`perf_log_named`], [`perf_log_result`]), which take the function as an
//!   `FnOnce() -> R` closure;
//! - the [`log_time`] attribute, which rewrites a `fn` item to run its body
//!   under [`perf_log_named`].
//!
//! [`logging::init`] installs a matching process-wide subscriber with a
//! timestamped line format and an optional per-process request identifier.
//!
//! # Example
//!
//! ```rust
//! use perflog::log_time;
//!
//! #[log_time(level = "debug", print_return)]
//! fn add(x: i32, y: i32) -> i32 {
//!     x + y
//! }
//!
//! // The wrapped value passes through to the caller.
//! assert_eq!(add(2, 3), 5);
//! ```

pub mod config;
pub mod logging;
pub mod measure;

pub use config::PerfConfig;
pub use measure::{perf_log, perf_log_config, perf_log_named, perf_log_result, RESULT_PLACEHOLDER};
pub use perflog_macro::log_time;
pub use tracing::Level;
