use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,spin_wheel_server=info,tower_http=info";

// Connection-level chatter from the HTTP client and server stacks
const QUIET_TARGETS: [&str; 3] = ["hyper", "reqwest", "h2"];

/// Collects the `message` field plus any structured fields as `key=value`.
#[derive(Default)]
struct EventFields {
    message: String,
    extra: String,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.extra, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.extra, " {}={:?}", field.name(), value);
        }
    }
}

fn level_tag(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN ",
        Level::INFO => "INFO ",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

fn format_line(timestamp: &str, level: &Level, target: &str, message: &str, extra: &str) -> String {
    format!("[{}] {} {} - {}{}", timestamp, level_tag(level), target, message, extra)
}

fn is_quiet(target: &str) -> bool {
    QUIET_TARGETS.iter().any(|quiet| target.starts_with(quiet))
}

struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_quiet(metadata.target()) {
            return;
        }

        let mut fields = EventFields::default();
        event.record(&mut fields);
        if fields.message.is_empty() && fields.extra.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, metadata.level(), metadata.target(), &fields.message, &fields.extra);

        if *metadata.level() <= Level::WARN {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

/// Installs the console subscriber. `RUST_LOG` overrides the default filter.
pub fn setup() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = Registry::default()
        .with(env_filter)
        .with(ConsoleLayer);

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set subscriber");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(
            "2025-01-01 12:00:00.000",
            &Level::INFO,
            "spin_wheel_server::handlers",
            "Generated 8 prizes",
            " theme=午餐",
        );
        assert_eq!(
            line,
            "[2025-01-01 12:00:00.000] INFO  spin_wheel_server::handlers - Generated 8 prizes theme=午餐"
        );
    }

    #[test]
    fn test_quiet_targets() {
        assert!(is_quiet("hyper::proto::h1"));
        assert!(is_quiet("reqwest::connect"));
        assert!(!is_quiet("spin_wheel_server::generator::gemini"));
    }
}
