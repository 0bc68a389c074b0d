mod common;

use common::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use deferred_view::config::Config;
use deferred_view::ui::app::{App, DemoOptions};
use deferred_view::ui::deferred::DeferredState;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(200);

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    buffer_text(terminal.backend().buffer())
}

async fn settle() {
    tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn panel_loads_and_new_panels_mount_ready() {
    let mut app = App::new(
        &Config::default(),
        DemoOptions {
            delay: DELAY,
            fail: false,
        },
    );
    assert_eq!(app.panel_count(), 1);

    let screen = draw(&mut app);
    assert!(screen.contains("Loading…"));
    assert!(screen.contains("loading"));

    settle().await;
    let screen = draw(&mut app);
    assert!(screen.contains("Summary view"));

    app.on_key(key('n'));
    draw(&mut app);
    assert_eq!(
        app.panel_states(),
        vec![DeferredState::Ready, DeferredState::Ready]
    );
}

#[tokio::test(start_paused = true)]
async fn title_matches_content_on_the_settling_frame() {
    let mut app = App::new(
        &Config::default(),
        DemoOptions {
            delay: DELAY,
            fail: false,
        },
    );
    assert!(draw(&mut app).contains("#1 loading"));

    settle().await;
    let screen = draw(&mut app);
    assert!(screen.contains("Summary view"));
    assert!(screen.contains("#1 ready"));
    assert!(!screen.contains("#1 loading"));
}

#[tokio::test(start_paused = true)]
async fn builder_swap_rebuilds_every_panel() {
    let mut app = App::new(
        &Config::default(),
        DemoOptions {
            delay: DELAY,
            fail: false,
        },
    );
    draw(&mut app);
    settle().await;

    app.on_key(key('b'));
    let screen = draw(&mut app);
    assert!(screen.contains("Detail view"));
    assert!(!screen.contains("Summary view"));
}

#[tokio::test(start_paused = true)]
async fn failure_lands_in_status_line() {
    let mut app = App::new(
        &Config::default(),
        DemoOptions {
            delay: DELAY,
            fail: true,
        },
    );
    draw(&mut app);
    settle().await;

    let screen = draw(&mut app);
    assert!(screen.contains("Load failed"));
    assert_eq!(app.failures().len(), 1);
    assert!(app.failures()[0].contains("report bundle unavailable"));
    assert!(app.panel_states()[0].is_failed());
}

#[tokio::test(start_paused = true)]
async fn drop_and_quit_keys() {
    let mut app = App::new(
        &Config::default(),
        DemoOptions {
            delay: DELAY,
            fail: false,
        },
    );
    app.on_key(key('d'));
    assert_eq!(app.panel_count(), 0);
    assert!(draw(&mut app).contains("No panels mounted"));

    assert!(!app.should_quit());
    app.on_key(key('q'));
    assert!(app.should_quit());
}
