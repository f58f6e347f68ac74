//! Process-wide subscriber setup for perf-log output.

use std::fmt;
use std::sync::OnceLock;

use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

static REQUEST_ID: OnceLock<String> = OnceLock::new();

/// Identifier generated once per process and stable for its lifetime.
pub fn request_id() -> &'static str {
    REQUEST_ID.get_or_init(|| Uuid::new_v4().to_string())
}

/// Options for the process-wide subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is unset
    pub level: Level,
    /// Tag every record with the per-process [`request_id`]
    pub tag_request_id: bool,
    /// Line terminator appended to every record
    pub terminator: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            tag_request_id: false,
            terminator: "\n",
        }
    }
}

impl LogConfig {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn with_request_id(mut self) -> Self {
        self.tag_request_id = true;
        self
    }

    pub fn with_terminator(mut self, terminator: &'static str) -> Self {
        self.terminator = terminator;
        self
    }
}

// `YYYY-mm-dd HH:MM:SS LEVEL [request-id] target : message`, terminated as
// configured.
struct LineFormat {
    request_id: Option<&'static str>,
    terminator: &'static str,
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} {} ",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            meta.level()
        )?;
        if let Some(id) = self.request_id {
            write!(writer, "[{id}] ")?;
        }
        write!(writer, "{} : ", meta.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        write!(writer, "{}", self.terminator)
    }
}

/// Installs the global subscriber writing to stderr.
///
/// Filtering honors `RUST_LOG` when set and falls back to `config.level`.
/// Safe to call more than once; later calls are no-ops.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let format = LineFormat {
        request_id: config.tag_request_id.then(request_id),
        terminator: config.terminator,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(format)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Sink {
        type Writer = Sink;

        fn make_writer(&'a self) -> Sink {
            self.clone()
        }
    }

    #[test]
    fn line_format_matches_the_documented_shape() {
        let sink = Sink::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(sink.clone())
            .event_format(LineFormat {
                request_id: Some(request_id()),
                terminator: "\r\n",
            })
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("hello");
        });

        let line = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        // `YYYY-mm-dd HH:MM:SS` prefix
        assert_eq!(line.as_bytes()[4], b'-');
        assert_eq!(line.as_bytes()[13], b':');
        assert!(line.contains(" INFO "));
        assert!(line.contains(&format!("[{}]", request_id())));
        assert!(line.contains("hello"));
        assert!(line.ends_with("\r\n"));
    }

    #[test]
    fn request_id_is_stable_within_the_process() {
        let first = request_id();
        let second = request_id();
        assert_eq!(first, second);
        // Hyphenated UUID
        assert_eq!(first.len(), 36);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(&LogConfig::default());
        init(&LogConfig::new(Level::DEBUG).with_request_id());
        tracing::info!("subscriber installed");
    }
}
