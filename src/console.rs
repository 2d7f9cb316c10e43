use crate::format::format_time;
use crate::lap::Lap;
use crate::observer::Observer;
use serde::Serialize;
use std::collections::VecDeque;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Redraws the time in place and prints the lap list.
    #[default]
    Text,
    /// One JSON object per line for every state change.
    Json,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Display {
        time: &'a str,
    },
    Running {
        running: bool,
    },
    Lap {
        index: u32,
        label: String,
        time: String,
        announcement: &'a str,
    },
    Cleared,
}

/// Renders the stopwatch onto a terminal or any other writer.
pub struct Console<W> {
    writer: W,
    format: Format,
    time: String,
    running: bool,
    // Most recent first, like the on-screen list.
    laps: VecDeque<Lap>,
}

impl<W: Write> Console<W> {
    pub fn new(writer: W, format: Format) -> Self {
        Self {
            writer,
            format,
            time: format_time(0),
            running: false,
            laps: VecDeque::new(),
        }
    }

    /// The laps currently shown, most recent first.
    pub fn laps(&self) -> impl Iterator<Item = &Lap> + '_ {
        self.laps.iter()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, event: &Event<'_>) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.writer, event)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }

    fn redraw(&mut self) -> std::io::Result<()> {
        let hint = if self.running { "[Stop]" } else { "[Start]" };
        write!(self.writer, "\r{}  {:<7}", self.time, hint)?;
        self.writer.flush()
    }

    fn print_laps(&mut self, announcement: &str) -> std::io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{announcement}")?;
        for lap in self.laps.iter() {
            writeln!(self.writer, "  {lap}")?;
        }
        self.redraw()
    }

    fn print_cleared(&mut self) -> std::io::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Laps cleared")?;
        self.redraw()
    }
}

fn report(result: std::io::Result<()>) {
    if let Err(e) = result {
        tracing::warn!(%e, "Failed to update the console");
    }
}

impl<W: Write> Observer for Console<W> {
    fn on_display(&mut self, time: &str) {
        self.time = time.to_string();

        let result = match self.format {
            Format::Text => self.redraw(),
            Format::Json => self.emit(&Event::Display { time }),
        };
        report(result);
    }

    fn on_running_changed(&mut self, running: bool) {
        self.running = running;

        let result = match self.format {
            Format::Text => self.redraw(),
            Format::Json => self.emit(&Event::Running { running }),
        };
        report(result);
    }

    fn on_lap(&mut self, lap: &Lap, announcement: &str) {
        self.laps.push_front(*lap);

        let result = match self.format {
            Format::Text => self.print_laps(announcement),
            Format::Json => self.emit(&Event::Lap {
                index: lap.index,
                label: lap.label(),
                time: lap.time(),
                announcement,
            }),
        };
        report(result);
    }

    fn on_laps_cleared(&mut self) {
        self.laps.clear();

        let result = match self.format {
            Format::Text => self.print_cleared(),
            Format::Json => self.emit(&Event::Cleared),
        };
        report(result);
    }
}
