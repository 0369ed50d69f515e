#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Keeps the trace writer alive. Pending events are flushed when it drops,
/// so hold it until the end of `main`.
#[must_use]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the global tracing subscriber.
///
/// With a log directory, events go to `sx-trace.jsonl` inside it as JSON
/// lines at debug level; otherwise only warnings reach stderr. `RUST_LOG`
/// overrides either default. Only the first call installs anything.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: Option<&Path>) -> TraceGuard {
    let mut worker = None;
    INIT.call_once(|| {
        let filter = || {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive(log_dir)))
        };
        match log_dir {
            Some(dir) => {
                let file_appender = tracing_appender::rolling::never(dir, "sx-trace.jsonl");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                worker = Some(guard);

                tracing_subscriber::fmt()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                    .with_env_filter(filter())
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_env_filter(filter())
                    .init();
            }
        }
    });
    TraceGuard { _worker: worker }
}

#[cfg(feature = "trace")]
fn default_directive(log_dir: Option<&Path>) -> &'static str {
    match log_dir {
        Some(_) => "sx_engine=debug",
        None => "sx_engine=warn",
    }
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: Option<&std::path::Path>) -> TraceGuard {
    TraceGuard {}
}
