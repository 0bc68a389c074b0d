use std::io;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::config::Config;
use crate::ui::app::{App, DemoOptions};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::terminal_guard::setup_terminal;

/// Run the demo until the user quits.
///
/// Draws every spinner tick; deferred panels pick up settled loads on the
/// next draw.
pub async fn run(config: &Config, options: DemoOptions) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.placeholder.spinner_interval_ms);
    let mut app = App::new(config, options);
    let mut events = EventHandler::new();
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(
        delay_ms = options.delay.as_millis() as u64,
        fail = options.fail,
        "Demo started"
    );

    loop {
        terminal.draw(|frame| app.draw(frame))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => app.on_key(key),
                Some(AppEvent::Resize) => {}
                None => break,
            },
            _ = ticker.tick() => app.on_tick(),
        }
    }

    drop(guard);
    Ok(())
}
