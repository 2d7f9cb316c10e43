use crate::lap::Lap;

/// Receives the stopwatch's state changes for presentation.
pub trait Observer {
    /// The current elapsed time, already formatted as `MM:SS:CC`.
    fn on_display(&mut self, _time: &str) {}

    fn on_running_changed(&mut self, _running: bool) {}

    /// A lap to prepend to the visible list.
    fn on_lap(&mut self, _lap: &Lap, _announcement: &str) {}

    fn on_laps_cleared(&mut self) {}
}

impl Observer for () {}
