use crate::format::format_duration;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// A snapshot of the elapsed time taken by a lap command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    pub index: u32,
    pub elapsed: Duration,
}

impl Lap {
    /// List label, e.g. `Lap 01`.
    pub fn label(&self) -> String {
        format!("Lap {:02}", self.index)
    }

    pub fn time(&self) -> String {
        format_duration(self.elapsed)
    }

    /// Text for assistive presentation, e.g. `Lap 1 recorded at 00:01:50`.
    pub fn announcement(&self) -> String {
        format!("Lap {} recorded at {}", self.index, self.time())
    }
}

impl Display for Lap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}", self.label(), self.time())
    }
}
