//! Output seam between the render cycle and whatever displays it.

use std::io::{self, Write};

use gdp_core::HistoryEntry;
use gdp_core::calculations::common::format_amount;

use crate::charts::ChartRequest;

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageKind {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "[ok] ",
            Self::Warning => "[!] ",
            Self::Error => "[error] ",
        }
    }
}

/// Receives everything a render cycle or action produces for display.
pub trait Presenter {
    /// A labelled value such as `("PIB final", "20.00")`.
    fn readout(
        &mut self,
        label: &str,
        value: &str,
    ) -> io::Result<()>;

    fn chart(
        &mut self,
        chart: &ChartRequest,
    ) -> io::Result<()>;

    fn message(
        &mut self,
        kind: MessageKind,
        text: &str,
    ) -> io::Result<()>;

    /// The saved GDP history, already sorted by year.
    fn history(
        &mut self,
        entries: &[HistoryEntry],
    ) -> io::Result<()>;

    /// Signals readiness for the next command.
    fn prompt(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Plain-text presenter writing to any [`Write`] sink.
///
/// Charts are rendered as a table of their points: one row for the x values
/// and one row per series.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn readout(
        &mut self,
        label: &str,
        value: &str,
    ) -> io::Result<()> {
        writeln!(self.out, "{label}: {value}")
    }

    fn chart(
        &mut self,
        chart: &ChartRequest,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "── {} ── (x: {}, y: {})",
            chart.title, chart.x_label, chart.y_label
        )?;

        let Some(first) = chart.series.first() else {
            return writeln!(self.out, "  (no data)");
        };

        write!(self.out, "  {:<10}", chart.x_label)?;
        for (x, _) in &first.points {
            write!(self.out, " {:>8}", format_amount(*x))?;
        }
        writeln!(self.out)?;

        for series in &chart.series {
            let label = series.label.as_deref().unwrap_or(&chart.y_label);
            write!(self.out, "  {label:<10}")?;
            for (_, y) in &series.points {
                write!(self.out, " {:>8}", format_amount(*y))?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn message(
        &mut self,
        kind: MessageKind,
        text: &str,
    ) -> io::Result<()> {
        writeln!(self.out, "{}{text}", kind.prefix())
    }

    fn history(
        &mut self,
        entries: &[HistoryEntry],
    ) -> io::Result<()> {
        if entries.is_empty() {
            return writeln!(self.out, "No GDP values saved.");
        }

        writeln!(self.out, "Saved GDP history")?;
        for entry in entries {
            writeln!(
                self.out,
                "  {}  {:>10} B",
                entry.year,
                format_amount(entry.value)
            )?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "gdp> ")?;
        self.out.flush()
    }
}
