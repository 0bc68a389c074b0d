//! Demo application: a row of deferred panels backed by one library.

use crossterm::event::{KeyCode, KeyEvent};
use parking_lot::Mutex;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::loader::{Library, LoadCache, LoadStatus, ModuleId};
use crate::ui::deferred::{ContentBuilder, DeferredState, DeferredView};
use crate::ui::placeholder::{LoadingIndicator, Placeholder};
use crate::ui::scope::{Propagation, Scope};
use crate::ui::theme::{ACCENT, BODY_TEXT, GLOBAL_BORDER, MUTED_TEXT, SPINNER, STATUS_ERROR};

/// Module every demo panel defers on.
pub const REPORT_MODULE: ModuleId = ModuleId::from_static("demo.report");

const MAX_PANELS: usize = 6;

/// How the demo's simulated module load behaves.
#[derive(Debug, Clone, Copy)]
pub struct DemoOptions {
    pub delay: Duration,
    pub fail: bool,
}

type Panel = DeferredView<Paragraph<'static>>;

pub struct App {
    cache: LoadCache,
    scope: Arc<Scope>,
    library: Library,
    builders: [ContentBuilder<Paragraph<'static>>; 2],
    builder_index: usize,
    panels: Vec<Panel>,
    failures: Arc<Mutex<Vec<String>>>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, options: DemoOptions) -> Self {
        let root = Scope::root();
        let failures = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&failures);
        root.on_load_failure(move |failure| {
            sink.lock().push(failure.error.to_string());
            Propagation::Stop
        });
        let indicator = LoadingIndicator::from_config(&config.placeholder);
        let scope = root.child_with_placeholder("panels", Placeholder::from(indicator));

        let mut app = Self {
            cache: LoadCache::from_config(&config.loader),
            scope,
            library: report_library(options),
            builders: [
                ContentBuilder::new(summary_view),
                ContentBuilder::new(detail_view),
            ],
            builder_index: 0,
            panels: Vec::new(),
            failures,
            should_quit: false,
        };
        app.add_panel();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn panel_states(&self) -> Vec<DeferredState> {
        self.panels.iter().map(|panel| panel.state().clone()).collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().clone()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.add_panel(),
            KeyCode::Char('d') => {
                self.panels.pop();
            }
            KeyCode::Char('b') => self.swap_builder(),
            _ => {}
        }
    }

    pub fn on_tick(&mut self) {
        for panel in &mut self.panels {
            panel.on_tick();
        }
    }

    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(header(), rows[0]);
        self.draw_panels(frame, rows[1]);
        let status = self.status_line();
        frame.render_widget(status, rows[2]);
    }

    fn add_panel(&mut self) {
        if self.panels.len() >= MAX_PANELS {
            return;
        }
        let panel = DeferredView::new(
            self.library.clone(),
            self.builders[self.builder_index].clone(),
            self.cache.clone(),
            Arc::clone(&self.scope),
        );
        self.panels.push(panel);
    }

    fn swap_builder(&mut self) {
        self.builder_index = (self.builder_index + 1) % self.builders.len();
        let builder = &self.builders[self.builder_index];
        for panel in &mut self.panels {
            panel.set_builder(builder.clone());
        }
    }

    fn draw_panels(&mut self, frame: &mut Frame<'_>, area: Rect) {
        if self.panels.is_empty() {
            let hint = Paragraph::new("No panels mounted. Press n.")
                .style(Style::default().fg(MUTED_TEXT))
                .block(bordered(" Panels "));
            frame.render_widget(hint, area);
            return;
        }

        let count = self.panels.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, count); self.panels.len()])
            .split(area);

        for (index, (panel, column)) in self.panels.iter_mut().zip(columns.iter()).enumerate() {
            panel.sync();
            let block = bordered(format!(" #{} {} ", index + 1, phase_label(panel.state())));
            let inner = block.inner(*column);
            frame.render_widget(block, *column);
            frame.render_widget(panel.build(), inner);
        }
    }

    fn status_line(&self) -> Paragraph<'static> {
        let line = match self.failures.lock().last() {
            Some(error) => Line::from(vec![
                Span::styled(" Load failed: ", Style::default().fg(STATUS_ERROR)),
                Span::styled(error.clone(), Style::default().fg(BODY_TEXT)),
            ]),
            None => {
                let (label, color) = match self.cache.status(&REPORT_MODULE) {
                    None => ("not requested", MUTED_TEXT),
                    Some(LoadStatus::Pending) => ("loading", ACCENT),
                    Some(LoadStatus::Loaded) => ("loaded", SPINNER),
                    Some(LoadStatus::Failed(_)) => ("failed", STATUS_ERROR),
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {}: ", REPORT_MODULE),
                        Style::default().fg(MUTED_TEXT),
                    ),
                    Span::styled(label, Style::default().fg(color)),
                ])
            }
        };
        Paragraph::new(line).block(bordered(" Status "))
    }
}

fn report_library(options: DemoOptions) -> Library {
    Library::new(REPORT_MODULE, move || load_report(options))
}

async fn load_report(options: DemoOptions) -> Result<(), String> {
    tokio::time::sleep(options.delay).await;
    if options.fail {
        return Err("report bundle unavailable".to_string());
    }
    Ok(())
}

fn summary_view() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Report",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from("Summary view"),
    ])
    .style(Style::default().fg(BODY_TEXT))
}

fn detail_view() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Report",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from("Detail view"),
        Line::from(Span::styled(
            "rebuilt after builder swap",
            Style::default().fg(MUTED_TEXT),
        )),
    ])
    .style(Style::default().fg(BODY_TEXT))
}

fn phase_label(state: &DeferredState) -> &'static str {
    match state {
        DeferredState::Uninitialized => "idle",
        DeferredState::Loading { .. } => "loading",
        DeferredState::Ready => "ready",
        DeferredState::Failed { .. } => "failed",
    }
}

fn header() -> Paragraph<'static> {
    let hints = " n: Mount │ d: Drop │ b: Swap builder │ q: Quit";
    Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Left)
    .block(bordered(" deferred-view "))
}

fn bordered<'a>(title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
