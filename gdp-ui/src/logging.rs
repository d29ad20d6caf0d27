//! Log output for a dashboard session.
//!
//! One reloadable level filter sits in front of two layers: a terminal layer
//! on stderr (stdout belongs to the dashboard) and a file layer that drops
//! records until a file is attached. [`init`] hands back a [`LogControl`]
//! for changing any of them while the session runs.

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{
        self, FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

/// `12:04:31.527  INFO gdp_core::history::gdp_history: GDP value saved year=2025`
struct SessionFormat;

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "1;31",
        Level::WARN => "1;33",
        Level::INFO => "1;32",
        Level::DEBUG => "1;34",
        Level::TRACE => "1;35",
    }
}

impl<S, N> FormatEvent<S, N> for SessionFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let time = Local::now().format("%H:%M:%S%.3f");

        if writer.has_ansi_escapes() {
            write!(
                writer,
                "\x1b[2m{time}\x1b[0m \x1b[{}m{:>5}\x1b[0m \x1b[36m{}:\x1b[0m ",
                level_color(*meta.level()),
                meta.level(),
                meta.target()
            )?;
        } else {
            write!(writer, "{time} {:>5} {}: ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Log file that can be attached after the subscriber is installed.
#[derive(Clone, Default)]
struct FileSink(Arc<Mutex<Option<File>>>);

impl FileSink {
    fn lock(&self) -> MutexGuard<'_, Option<File>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct FileSinkWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for FileSinkWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), File::flush)
    }
}

impl<'a> MakeWriter<'a> for FileSink {
    type Writer = FileSinkWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        FileSinkWriter(self.lock())
    }
}

type ReloadLevel = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;
type ReloadTerminal = Box<dyn Fn(bool) -> Result<()> + Send + Sync>;

/// Runtime switches for an installed subscriber.
pub struct LogControl {
    level: ReloadLevel,
    terminal: ReloadTerminal,
    file: FileSink,
}

impl LogControl {
    /// Replaces the level filter. Takes a bare level (`debug`) or any
    /// `EnvFilter` directive (`gdp_core=trace,info`).
    pub fn set_level(
        &self,
        directive: &str,
    ) -> Result<()> {
        (self.level)(directive)
    }

    /// Shows or hides stderr output. File output is unaffected.
    pub fn set_terminal_enabled(
        &self,
        enabled: bool,
    ) -> Result<()> {
        (self.terminal)(enabled)
    }

    /// Appends records to `path` from now on, replacing any earlier file.
    pub fn log_to_file(
        &self,
        path: &Path,
    ) -> Result<()> {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file '{}'", path.display()))?;
        *self.file.lock() = Some(file);
        Ok(())
    }
}

/// `RUST_LOG` when set and valid, else `default_directive`, else `info`.
fn initial_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(default_directive: &str) -> Result<LogControl> {
    let file = FileSink::default();
    let (level_layer, level_handle) = reload::Layer::new(initial_filter(default_directive));
    let (terminal_gate, terminal_handle) = reload::Layer::new(LevelFilter::TRACE);

    let terminal_layer = fmt::layer()
        .event_format(SessionFormat)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_filter(terminal_gate);
    let file_layer = fmt::layer()
        .event_format(SessionFormat)
        .with_ansi(false)
        .with_writer(file.clone());

    tracing_subscriber::registry()
        .with(level_layer)
        .with(terminal_layer)
        .with(file_layer)
        .try_init()
        .context("a global log subscriber is already installed")?;

    Ok(LogControl {
        level: Box::new(move |directive: &str| {
            let filter = EnvFilter::try_new(directive)
                .with_context(|| format!("invalid log level '{directive}'"))?;
            level_handle
                .reload(filter)
                .context("log filter reload failed")
        }),
        terminal: Box::new(move |enabled: bool| {
            let gate = if enabled {
                LevelFilter::TRACE
            } else {
                LevelFilter::OFF
            };
            terminal_handle
                .reload(gate)
                .context("terminal log toggle failed")
        }),
        file,
    })
}
