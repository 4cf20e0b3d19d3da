use std::fmt;

use colored::*;
use rackmap_common::config::{Config, PRINT_TARGET};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

const RAW_FIELD: &str = "raw_msg";

pub struct RackmapFormatter;

impl<S, N> FormatEvent<S, N> for RackmapFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a report event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == RAW_FIELD {
            self.0.push_str(value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == RAW_FIELD {
            self.0.push_str(&format!("{value:?}"));
        }
    }
}

/// Builds the level filter from `RUST_LOG` directives, or from the quiet level
/// when they are absent or invalid. Report lines stay enabled either way.
pub fn build_filter(cfg: &Config, env: Option<&str>) -> EnvFilter {
    env.map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(format!("{directives},{PRINT_TARGET}=info")).ok())
        .unwrap_or_else(|| EnvFilter::new(cfg.log_filter()))
}

/// Installs the terminal subscriber. `RUST_LOG` wins over the quiet level.
pub fn init_logging(cfg: &Config) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .event_format(RackmapFormatter)
        .with_env_filter(build_filter(cfg, env.as_deref()))
        .with_writer(std::io::stdout)
        .init();
}
