//! What a deferred view shows before its module is ready.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use std::fmt;
use std::sync::Arc;

use crate::config::PlaceholderConfig;
use crate::ui::theme::{BODY_TEXT, SPINNER};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Number of spinner frames; animation ticks cycle through `0..SPINNER_FRAME_COUNT`.
pub const SPINNER_FRAME_COUNT: u8 = SPINNER_FRAMES.len() as u8;

/// Built-in "loading" indicator: a spinner followed by a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingIndicator {
    label: String,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::from_config(&PlaceholderConfig::default())
    }
}

impl LoadingIndicator {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn from_config(config: &PlaceholderConfig) -> Self {
        Self::new(config.label.clone())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Spinner glyph for an animation tick.
    pub fn frame(animation_tick: u8) -> &'static str {
        SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, animation_tick: u8) {
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", Self::frame(animation_tick)),
                Style::default().fg(SPINNER),
            ),
            Span::styled(
                self.label.as_str(),
                Style::default().fg(BODY_TEXT).add_modifier(Modifier::DIM),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

type RenderFn = dyn Fn(Rect, &mut Buffer, u8) + Send + Sync;

/// Placeholder content for a view whose module is not ready.
///
/// Cheap to clone. Custom placeholders receive the spinner tick so they can
/// animate too.
#[derive(Clone)]
pub enum Placeholder {
    Indicator(LoadingIndicator),
    Custom(Arc<RenderFn>),
}

impl Placeholder {
    pub fn custom<F>(render: F) -> Self
    where
        F: Fn(Rect, &mut Buffer, u8) + Send + Sync + 'static,
    {
        Placeholder::Custom(Arc::new(render))
    }

    /// Use a fixed widget as the placeholder.
    pub fn widget<W>(widget: W) -> Self
    where
        W: Widget + Clone + Send + Sync + 'static,
    {
        Self::custom(move |area, buf, _| widget.clone().render(area, buf))
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, animation_tick: u8) {
        match self {
            Placeholder::Indicator(indicator) => indicator.render(area, buf, animation_tick),
            Placeholder::Custom(render) => render(area, buf, animation_tick),
        }
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Placeholder::Indicator(LoadingIndicator::default())
    }
}

impl From<LoadingIndicator> for Placeholder {
    fn from(indicator: LoadingIndicator) -> Self {
        Placeholder::Indicator(indicator)
    }
}

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Indicator(indicator) => {
                f.debug_tuple("Indicator").field(indicator).finish()
            }
            Placeholder::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
