use crate::app::App;
use crate::time_utils::{until_next_boundary, LocalClock};
use crate::ui;
use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use super::keys::handle_key;

/// Countdown and progress need second precision.
const COUNTDOWN_TICK: Duration = Duration::from_secs(1);
/// Row highlighting only changes at Adhan times, minute precision is enough.
const HIGHLIGHT_TICK: Duration = Duration::from_secs(60);
/// Marquee scroll and second-hand sweep.
const FRAME_TICK: Duration = Duration::from_millis(200);

/// Ticks at `period`, first firing at the next wall-clock boundary.
fn aligned_interval(clock: &LocalClock, period: Duration) -> Interval {
    let start = Instant::now() + until_next_boundary(clock.now(), period);
    let mut interval = interval_at(start, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Drive the dashboard until the user quits or the terminal fails.
///
/// All timers live in this future and stop when it returns.
pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    clock: LocalClock,
) -> Result<()> {
    let mut countdown_tick = aligned_interval(&clock, COUNTDOWN_TICK);
    let mut highlight_tick = aligned_interval(&clock, HIGHLIGHT_TICK);
    let mut frame_tick = tokio::time::interval(FRAME_TICK);
    frame_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            _ = countdown_tick.tick() => app.refresh_countdown(clock.now()),
            _ = highlight_tick.tick() => app.refresh_highlight(clock.now()),
            _ = frame_tick.tick() => app.advance_frame(clock.now()),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => handle_key(key, app),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => {
                    tracing::warn!("terminal event stream closed");
                    break;
                }
            },
        }

        if !app.running {
            break;
        }
    }

    tracing::info!("dashboard stopped");
    Ok(())
}
