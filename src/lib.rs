pub mod clock;
pub mod command;
pub mod console;
pub mod driver;
pub mod format;
pub mod lap;
pub mod observer;
pub mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use lap::Lap;
pub use observer::Observer;
pub use stopwatch::Stopwatch;
