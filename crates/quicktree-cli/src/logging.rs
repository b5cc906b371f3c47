use std::env;
use std::path::Path;
use tracing::{debug, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr so stdout carries only the report. Setting
/// `LOG_FILE_PATH` adds a plain-text file layer; keep the returned guard alive
/// until exit so it flushes.
pub fn init_logger() -> Option<WorkerGuard> {
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let filter_layer = EnvFilter::new(filter);

    let (file_layer, guard) = match env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let path = Path::new(&log_file_path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|f| f.to_os_string())
                .unwrap_or_else(|| "quicktree.log".into());

            let (layer, guard) = file_layer(dir, file_name);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .without_time()
                .with_ansi(true),
        )
        .with(file_layer)
        .with(filter_layer)
        .init();

    debug!("Tracing is configured for stderr logging.");

    guard
}

/// Plain-text layer writing to `dir/file_name` through a background worker.
/// Lines still buffered in the worker are written when the guard drops.
fn file_layer<S>(
    dir: impl AsRef<Path>,
    file_name: impl AsRef<Path>,
) -> (
    fmt::Layer<S, fmt::format::DefaultFields, fmt::format::Format, NonBlocking>,
    WorkerGuard,
)
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
    (layer, guard)
}
