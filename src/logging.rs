//! Tracing subscriber setup for the `rle` binary.

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter directives when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "warn,runlength_rs=info,rle=info";

/// Installs the global subscriber, writing to stderr so stdout stays free
/// for the decoded or encoded content.
///
/// `RUST_LOG` overrides `directives` when set.
pub fn setup_logging(directives: &str, pretty: bool) {
    match pretty {
        true => setup_logging_pretty(directives),
        false => setup_logging_json(directives),
    }
}

fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

fn setup_logging_json(directives: &str) {
    let main_layer = tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_target(false)
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(main_layer)
        .init()
}

fn setup_logging_pretty(directives: &str) {
    let main_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter(directives))
        .with(main_layer)
        .init()
}
