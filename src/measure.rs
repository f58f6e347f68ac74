//! Timing decorators reporting process CPU time per call.

use std::any::{type_name, Any};
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use cpu_time::ProcessTime;
use tracing::{debug, error, info, trace, warn, Level};

use crate::config::PerfConfig;

/// Token logged in place of the return value when result printing is off.
pub const RESULT_PLACEHOLDER: &str = "<NULL>";

/// Times `f` under [`PerfConfig::default`].
///
/// # Example
///
/// ```rust
/// let sum = perflog::perf_log(|| 2 + 3);
/// assert_eq!(sum, 5);
/// ```
pub fn perf_log<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
    R: Debug,
{
    perf_log_named(operation_of::<F>(), &PerfConfig::default(), f)
}

/// Times `f` with explicit configuration.
pub fn perf_log_config<F, R>(config: &PerfConfig, f: F) -> R
where
    F: FnOnce() -> R,
    R: Debug,
{
    perf_log_named(operation_of::<F>(), config, f)
}

/// Times `f` against process CPU time and logs one record for the call.
///
/// On success the record is emitted at `config.level` with the message
/// `Ran in: <seconds>s. Result: <value>`, where the value is the `Debug`
/// rendering of the result when `config.print_return` is set and
/// [`RESULT_PLACEHOLDER`] otherwise. The result itself is returned to the
/// caller unchanged.
///
/// A panic inside `f` is logged at error level together with the elapsed
/// time, then re-raised with its payload preserved.
pub fn perf_log_named<F, R>(operation: &str, config: &PerfConfig, f: F) -> R
where
    F: FnOnce() -> R,
    R: Debug,
{
    let timer = ProcessTime::now();
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => {
            let elapsed = timer.elapsed().as_secs_f64();
            let rendered = if config.print_return {
                format!("{result:?}")
            } else {
                RESULT_PLACEHOLDER.to_string()
            };
            emit(
                config.level,
                operation,
                &format!(
                    "Ran in: {elapsed:.prec$}s. Result: {rendered}",
                    prec = config.float_precision
                ),
            );
            result
        }
        Err(payload) => {
            let elapsed = timer.elapsed().as_secs_f64();
            let message = panic_message(&payload);
            error!(
                operation,
                "Ran in: {elapsed:.prec$}s. Panicked: {message}",
                prec = config.float_precision
            );
            panic::resume_unwind(payload)
        }
    }
}

/// Times a `Result`-returning `f`, logging `Err` outcomes at error level.
///
/// The `Result` is returned unchanged either way, so callers keep their
/// error-handling path.
pub fn perf_log_result<F, R, E>(config: &PerfConfig, f: F) -> Result<R, E>
where
    F: FnOnce() -> Result<R, E>,
    R: Debug,
    E: Debug,
{
    let operation = operation_of::<F>();
    let timer = ProcessTime::now();
    let result = f();
    let elapsed = timer.elapsed().as_secs_f64();
    match &result {
        Ok(value) => {
            let rendered = if config.print_return {
                format!("{value:?}")
            } else {
                RESULT_PLACEHOLDER.to_string()
            };
            emit(
                config.level,
                operation,
                &format!(
                    "Ran in: {elapsed:.prec$}s. Result: {rendered}",
                    prec = config.float_precision
                ),
            );
        }
        Err(e) => {
            error!(
                operation,
                error = ?e,
                "Ran in: {elapsed:.prec$}s. Result: {RESULT_PLACEHOLDER}",
                prec = config.float_precision
            );
        }
    }
    result
}

// The event macros need a const level, so dispatch by comparison.
fn emit(level: Level, operation: &str, message: &str) {
    if level == Level::ERROR {
        error!(operation, "{message}");
    } else if level == Level::WARN {
        warn!(operation, "{message}");
    } else if level == Level::INFO {
        info!(operation, "{message}");
    } else if level == Level::DEBUG {
        debug!(operation, "{message}");
    } else {
        trace!(operation, "{message}");
    }
}

// Falls back to the callable's type path, which for closures carries the
// enclosing function's module path.
fn operation_of<F>() -> &'static str {
    let name = type_name::<F>();
    name.strip_suffix("::{{closure}}").unwrap_or(name)
}

fn panic_message(payload: &Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
