mod cli;

use crate::cli::Arguments;
use clap::Parser;
use lapwatch::console::Console;
use lapwatch::{driver, Observer, Stopwatch, SystemClock};
use std::io;
use std::time::Duration;
use tracing_log::LogTracer;

fn main() {
    let arguments = Arguments::parse();
    set_log_level(&arguments).expect("Failed to configure logging");

    tracing::debug!(?arguments, "starting lapwatch");

    if let Err(e) = run(arguments) {
        tracing::error!(%e, "Unable to run the stopwatch");
    }
}

fn set_log_level(arguments: &Arguments) -> anyhow::Result<()> {
    LogTracer::init()?;

    let level = match arguments.verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn run(arguments: Arguments) -> anyhow::Result<()> {
    let runtime = runtime()?;

    let console = Console::new(io::stdout(), arguments.format);
    let mut stopwatch = Stopwatch::with_observer(SystemClock::default(), console);
    let time = stopwatch.display();
    stopwatch.observer_mut().on_display(&time);

    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let period = Duration::from_millis(arguments.tick);

    runtime.block_on(driver::run(&mut stopwatch, input, period))?;

    let laps: Vec<String> = stopwatch.laps().map(ToString::to_string).collect();
    tracing::info!(elapsed = %stopwatch.display(), ?laps, "stopwatch closed");

    Ok(())
}

// Everything stays on one thread; the stopwatch is never shared. Stdin is read
// on the blocking pool, so only the timer driver is needed.
fn runtime() -> io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
}
