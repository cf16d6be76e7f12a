use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,rps_backend=info,actix_web=info,actix_server=warn";

/// JSON logs to stdout; `RUST_LOG` overrides `DEFAULT_FILTER`.
///
/// Events inside a request carry the `request` span (trace id, method, path)
/// opened by `TraceSpan`, so game lifecycle events from the service layer can
/// be joined with their `request_completed` line.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
