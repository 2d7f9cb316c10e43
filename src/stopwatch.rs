//! The stopwatch engine: run state, elapsed time and lap history.
//!
//! The engine never schedules anything itself. Whoever owns it is expected to
//! call [`Stopwatch::tick`] periodically while [`Stopwatch::is_running`] holds.

use crate::clock::Clock;
use crate::format::format_duration;
use crate::lap::Lap;
use crate::observer::Observer;
use std::time::Duration;

pub struct Stopwatch<C, O = ()> {
    clock: C,
    observer: O,
    running: bool,
    elapsed: Duration,
    // Instant at which `elapsed` would have been zero; only set while running.
    anchor: Option<Duration>,
    // Oldest first.
    laps: Vec<Lap>,
    lap_counter: u32,
}

impl<C: Clock> Stopwatch<C> {
    pub fn new(clock: C) -> Self {
        Self::with_observer(clock, ())
    }
}

impl<C: Clock, O: Observer> Stopwatch<C, O> {
    pub fn with_observer(clock: C, observer: O) -> Self {
        Self {
            clock,
            observer,
            running: false,
            elapsed: Duration::ZERO,
            anchor: None,
            laps: Vec::new(),
            lap_counter: 0,
        }
    }

    /// Starts a stopped stopwatch or stops a running one.
    pub fn toggle_run(&mut self) {
        if self.running {
            self.elapsed = self.sample();
            self.anchor = None;
            self.running = false;

            tracing::debug!(elapsed_ms = self.elapsed.as_millis(), "stopwatch stopped");

            self.observer.on_running_changed(false);
            self.observer.on_display(&format_duration(self.elapsed));
        } else {
            let now = self.clock.now();
            self.anchor = Some(now.saturating_sub(self.elapsed));
            self.running = true;

            tracing::debug!(elapsed_ms = self.elapsed.as_millis(), "stopwatch started");

            self.observer.on_running_changed(true);
        }
    }

    /// Samples the clock and pushes the new time to the display. Does nothing
    /// while stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }

        self.elapsed = self.sample();
        tracing::trace!(elapsed_ms = self.elapsed.as_millis(), "tick");
        self.observer.on_display(&format_duration(self.elapsed));
    }

    /// Returns to the freshly created state, whatever the current one is.
    pub fn reset(&mut self) {
        self.running = false;
        self.anchor = None;
        self.elapsed = Duration::ZERO;
        self.laps.clear();
        self.lap_counter = 0;

        tracing::debug!("stopwatch reset");

        self.observer.on_running_changed(false);
        self.observer.on_display(&format_duration(Duration::ZERO));
        self.observer.on_laps_cleared();
    }

    /// Captures the elapsed time as the next lap.
    ///
    /// Ignored while stopped with no elapsed time, which covers a fresh or
    /// reset stopwatch and one stopped before any time accumulated. A stopped
    /// stopwatch with time on it still accepts laps, each capturing the
    /// frozen time.
    pub fn record_lap(&mut self) -> Option<Lap> {
        if !self.can_record_lap() {
            tracing::debug!("ignoring lap with no elapsed time");
            return None;
        }

        if self.running {
            self.elapsed = self.sample();
        }

        self.lap_counter += 1;
        let lap = Lap {
            index: self.lap_counter,
            elapsed: self.elapsed,
        };
        self.laps.push(lap);

        let announcement = lap.announcement();
        tracing::debug!(
            index = lap.index,
            elapsed_ms = lap.elapsed.as_millis(),
            "lap recorded"
        );
        self.observer.on_lap(&lap, &announcement);

        Some(lap)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The last sampled elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The last sampled elapsed time as `MM:SS:CC`.
    pub fn display(&self) -> String {
        format_duration(self.elapsed)
    }

    pub fn can_record_lap(&self) -> bool {
        self.running || !self.elapsed.is_zero()
    }

    /// Laps since the last reset, most recent first.
    pub fn laps(&self) -> impl Iterator<Item = &Lap> + '_ {
        self.laps.iter().rev()
    }

    pub fn lap_count(&self) -> usize {
        self.laps.len()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_parts(self) -> (C, O) {
        (self.clock, self.observer)
    }

    fn sample(&self) -> Duration {
        match self.anchor {
            // Never report less than what was already accumulated.
            Some(anchor) if self.running => {
                self.clock.now().saturating_sub(anchor).max(self.elapsed)
            }
            _ => self.elapsed,
        }
    }
}
