use crate::clock::Clock;
use crate::command::Command;
use crate::observer::Observer;
use crate::stopwatch::Stopwatch;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{Interval, MissedTickBehavior};

/// Feeds commands read line by line from `input` into the stopwatch and ticks
/// it every `period` while it runs.
///
/// Returns once a quit command is read or the input is exhausted.
pub async fn run<C, O, R>(
    stopwatch: &mut Stopwatch<C, O>,
    input: R,
    period: Duration,
) -> anyhow::Result<()>
where
    C: Clock,
    O: Observer,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut ticker: Option<Interval> = None;

    tracing::debug!(period_ms = period.as_millis(), "waiting for commands");

    loop {
        tokio::select! {
            _ = next_tick(&mut ticker) => stopwatch.tick(),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("input closed");
                    break;
                };

                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => apply(stopwatch, command),
                    Err(e) => tracing::warn!(%e, "Ignoring input"),
                }
            }
        }

        // The timer only lives while the stopwatch runs.
        match (stopwatch.is_running(), ticker.is_some()) {
            (true, false) => ticker = Some(start_ticker(period)),
            (false, true) => ticker = None,
            _ => {}
        }
    }

    Ok(())
}

pub fn apply<C: Clock, O: Observer>(stopwatch: &mut Stopwatch<C, O>, command: Command) {
    tracing::debug!(%command, "applying command");

    match command {
        Command::Toggle => stopwatch.toggle_run(),
        Command::Lap => {
            if let Some(lap) = stopwatch.record_lap() {
                tracing::info!(%lap, "Recorded lap");
            }
        }
        Command::Reset => stopwatch.reset(),
        Command::Quit => {}
    }
}

fn start_ticker(period: Duration) -> Interval {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ManualClock, SystemClock};
    use crate::observer::testing::{Event, Recorder};
    use tokio::io::{AsyncWriteExt, BufReader};

    fn stopwatch() -> (ManualClock, Stopwatch<ManualClock, Recorder>) {
        let clock = ManualClock::default();
        let sw = Stopwatch::with_observer(clock.clone(), Recorder::default());
        (clock, sw)
    }

    #[tokio::test]
    async fn test_run_until_quit() {
        let (_, mut sw) = stopwatch();
        let input = BufReader::new(&b"start\nlap\nstop\nlap\nq\nreset\n"[..]);

        run(&mut sw, input, Duration::from_millis(10)).await.unwrap();

        assert!(!sw.is_running());
        let indices: Vec<u32> = sw.observer().laps().iter().map(|lap| lap.index).collect();
        assert_eq!(indices, vec![1]);
        assert_eq!(sw.lap_count(), 1);
        assert!(!sw.observer().events.contains(&Event::Cleared));
    }

    #[tokio::test]
    async fn test_run_until_end_of_input() {
        let (_, mut sw) = stopwatch();
        let input = BufReader::new(&b"nonsense\nlap\ns\n\nr\n"[..]);

        run(&mut sw, input, Duration::from_millis(10)).await.unwrap();

        assert!(!sw.is_running());
        assert_eq!(sw.lap_count(), 0);
        assert_eq!(sw.observer().events.last(), Some(&Event::Cleared));
    }

    #[tokio::test]
    async fn test_ticks_only_while_running() {
        let mut sw = Stopwatch::with_observer(SystemClock::default(), Recorder::default());
        let (mut writer, reader) = tokio::io::duplex(64);

        let typist = tokio::spawn(async move {
            for line in ["s\n", "s\n", "s\n", "r\n", "q\n"] {
                writer.write_all(line.as_bytes()).await?;
                tokio::time::sleep(Duration::from_millis(60)).await;
            }
            std::io::Result::Ok(())
        });

        run(&mut sw, BufReader::new(reader), Duration::from_millis(10))
            .await
            .unwrap();
        typist.await.unwrap().unwrap();

        let events = &sw.observer().events;
        let switches: Vec<usize> = events
            .iter()
            .enumerate()
            .filter_map(|(i, event)| matches!(event, Event::Running(_)).then_some(i))
            .collect();
        let states: Vec<&Event> = switches.iter().map(|&i| &events[i]).collect();
        assert_eq!(
            states,
            vec![
                &Event::Running(true),
                &Event::Running(false),
                &Event::Running(true),
                &Event::Running(false),
            ]
        );

        let is_display = |event: &Event| matches!(event, Event::Display(_));

        // Ticks while running.
        assert!(events[switches[0] + 1..switches[1]].iter().any(is_display));
        assert!(events[switches[2] + 1..switches[3]].iter().any(is_display));

        // Only the frozen time between stop and restart.
        let paused = &events[switches[1] + 1..switches[2]];
        assert_eq!(paused.len(), 1);
        assert!(is_display(&paused[0]));

        // Nothing after the reset clears the laps.
        assert_eq!(
            &events[switches[3] + 1..],
            &[Event::Display("00:00:00".to_string()), Event::Cleared]
        );
    }

    #[test]
    fn test_apply_lap_after_stop() {
        let (clock, mut sw) = stopwatch();
        apply(&mut sw, Command::Lap);
        assert_eq!(sw.lap_count(), 0);

        apply(&mut sw, Command::Toggle);
        clock.advance_ms(1_500);
        apply(&mut sw, Command::Toggle);
        apply(&mut sw, Command::Lap);
        apply(&mut sw, Command::Quit);

        let times: Vec<String> = sw.laps().map(|lap| lap.time()).collect();
        assert_eq!(times, vec!["00:01:50"]);
    }
}
