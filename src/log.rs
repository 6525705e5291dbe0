use colored::{ColoredString, Colorize};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = *event.metadata().level();

        match level {
            Level::INFO => {}
            Level::ERROR => write!(writer, "❌ ")?,
            Level::WARN => write!(writer, "⚠️  ")?,
            Level::DEBUG => write!(writer, "{} ", "[DEBUG]".blue().bold())?,
            Level::TRACE => write!(writer, "{} ", "[TRACE]".purple().bold())?,
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if let Some(message) = visitor.message {
            write!(writer, "{}", paint(level, &message))?;
        }

        writeln!(writer)
    }
}

fn paint(level: Level, message: &str) -> ColoredString {
    match level {
        Level::ERROR => message.red().bold(),
        Level::WARN => message.yellow().bold(),
        Level::INFO => message.green().bold(),
        Level::DEBUG => message.blue(),
        Level::TRACE => message.purple(),
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        }
    }
}

/// Maps the `-v` count to a default filter; `RUST_LOG` wins when set.
pub fn default_filter(verbose_level: u8) -> &'static str {
    match verbose_level {
        0 => "INFO",
        1 => "DEBUG",
        _ => "TRACE",
    }
}

pub fn init_logging(verbose_level: u8) {
    let filter = default_filter(verbose_level);
    let formatting_layer = tracing_subscriber::fmt::layer()
        .event_format(CustomFormatter)
        .with_ansi(true);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(formatting_layer)
        .try_init();
}

pub struct StyledText<'a> {
    parts: Vec<String>,
    sep: &'a str,
}

impl<'a> StyledText<'a> {
    pub fn new(sep: &'a str) -> Self {
        Self {
            parts: Vec::new(),
            sep,
        }
    }

    pub fn println(&self) {
        println!("{}", self.build());
    }

    pub fn build(&self) -> String {
        self.parts.join(self.sep)
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.parts.push(text.to_string());
        self
    }

    /// 青色粗体
    pub fn cyan_bold(&mut self, text: &str) -> &mut Self {
        self.parts.push(text.cyan().bold().to_string());
        self
    }

    /// 绿色粗体
    pub fn green_bold(&mut self, text: &str) -> &mut Self {
        self.parts.push(text.green().bold().to_string());
        self
    }
}
