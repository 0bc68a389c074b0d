//! Shared test utilities: counting loaders, counting builders, buffer capture.

#![allow(dead_code, unused_imports)]

use deferred_view::loader::{Library, LoadCache};
use deferred_view::ui::deferred::{ContentBuilder, DeferredView, Rendered};
use deferred_view::ui::scope::Scope;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Widget};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub type TextView = DeferredView<Paragraph<'static>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("bundle missing: {0}")]
pub struct BundleMissing(pub &'static str);

/// Library that sleeps `delay` then succeeds. Returns the invocation counter.
pub fn succeeding_after(id: &'static str, delay: Duration) -> (Library, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let library = Library::new(id, move || {
        counter.fetch_add(1, Ordering::SeqCst);
        async move {
            tokio::time::sleep(delay).await;
            Ok::<(), BundleMissing>(())
        }
    });
    (library, calls)
}

/// Library that sleeps `delay` then fails with `error`.
pub fn failing_after(
    id: &'static str,
    delay: Duration,
    error: BundleMissing,
) -> (Library, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let library = Library::new(id, move || {
        counter.fetch_add(1, Ordering::SeqCst);
        let error = error.clone();
        async move {
            tokio::time::sleep(delay).await;
            Err::<(), BundleMissing>(error)
        }
    });
    (library, calls)
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}

/// Builder producing a one-line paragraph. Returns the build counter.
pub fn counting_builder(
    text: &'static str,
) -> (ContentBuilder<Paragraph<'static>>, Rc<Cell<usize>>) {
    let builds = Rc::new(Cell::new(0));
    let counter = Rc::clone(&builds);
    let builder = ContentBuilder::new(move || {
        counter.set(counter.get() + 1);
        Paragraph::new(text)
    });
    (builder, builds)
}

pub fn view(
    library: &Library,
    builder: &ContentBuilder<Paragraph<'static>>,
    cache: &LoadCache,
    scope: &Arc<Scope>,
) -> TextView {
    DeferredView::new(
        library.clone(),
        builder.clone(),
        cache.clone(),
        Arc::clone(scope),
    )
}

pub fn buffer_text(buf: &Buffer) -> String {
    buf.content.iter().map(|cell| cell.symbol()).collect()
}

/// Render one frame into a `width` x 1 buffer and return its text.
pub fn render_line<'a, C>(rendered: Rendered<'a, C>, width: u16) -> String
where
    &'a C: Widget,
{
    let area = Rect::new(0, 0, width, 1);
    let mut buf = Buffer::empty(area);
    rendered.render(area, &mut buf);
    buffer_text(&buf)
}
