use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::fmt;
use std::sync::Arc;

use crate::loader::{Library, LoadCache, LoadError, LoadStatus, ModuleId, PendingLoad};
use crate::ui::deferred::intent::DeferredIntent;
use crate::ui::deferred::reducer::DeferredReducer;
use crate::ui::deferred::state::DeferredState;
use crate::ui::mvi::Reducer;
use crate::ui::placeholder::Placeholder;
use crate::ui::scope::{LoadFailure, Scope};

/// Zero-argument constructor for a deferred view's content.
///
/// Compared by identity: clones of one builder are the same builder, two
/// builders made from identical closures are not.
pub struct ContentBuilder<C> {
    build: Arc<dyn Fn() -> C>,
}

impl<C> ContentBuilder<C> {
    pub fn new<F>(build: F) -> Self
    where
        F: Fn() -> C + 'static,
    {
        Self {
            build: Arc::new(build),
        }
    }

    pub fn build(&self) -> C {
        (self.build)()
    }

    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.build, &other.build)
    }
}

impl<C> Clone for ContentBuilder<C> {
    fn clone(&self) -> Self {
        Self {
            build: Arc::clone(&self.build),
        }
    }
}

impl<C> fmt::Debug for ContentBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentBuilder({:p})", Arc::as_ptr(&self.build) as *const ())
    }
}

struct Built<C> {
    builder: ContentBuilder<C>,
    content: C,
}

/// A component whose module loads on first display.
///
/// Call [`build`](Self::build) every frame: the first call mounts the view,
/// later calls pick up the load's settlement and rebuild the content when the
/// builder changed. Dropping the view while it is loading leaves the shared
/// load running for everyone else.
pub struct DeferredView<C> {
    library: Library,
    cache: LoadCache,
    scope: Arc<Scope>,
    builder: ContentBuilder<C>,
    placeholder: Option<Placeholder>,
    state: DeferredState,
    pending: Option<PendingLoad>,
    failure: Option<LoadError>,
    built: Option<Built<C>>,
}

impl<C> DeferredView<C> {
    pub fn new(
        library: Library,
        builder: ContentBuilder<C>,
        cache: LoadCache,
        scope: Arc<Scope>,
    ) -> Self {
        Self {
            library,
            cache,
            scope,
            builder,
            placeholder: None,
            state: DeferredState::default(),
            pending: None,
            failure: None,
            built: None,
        }
    }

    /// Placeholder for this view, overriding whatever the scope supplies.
    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn module(&self) -> &ModuleId {
        self.library.id()
    }

    pub fn state(&self) -> &DeferredState {
        &self.state
    }

    pub fn scope(&self) -> &Arc<Scope> {
        &self.scope
    }

    /// The load this view is waiting on, if any.
    pub fn pending(&self) -> Option<&PendingLoad> {
        self.pending.as_ref()
    }

    /// Content built so far. May lag behind a builder set since the last
    /// [`build`](Self::build).
    pub fn content(&self) -> Option<&C> {
        self.built.as_ref().map(|built| &built.content)
    }

    /// Supply the builder for subsequent builds.
    pub fn set_builder(&mut self, builder: ContentBuilder<C>) {
        self.builder = builder;
    }

    /// Mount the view. Idempotent.
    ///
    /// If the module is already loaded the content is built right away;
    /// otherwise the load is requested (or joined) and the view shows its
    /// placeholder until it settles. The load is driven on the current Tokio
    /// runtime; mounted outside one, the view fails with
    /// [`LoadError::Aborted`].
    pub fn mount(&mut self) {
        if self.state != DeferredState::Uninitialized {
            return;
        }

        let already_loaded = self.cache.is_loaded(self.library.id());
        self.dispatch(DeferredIntent::Mount { already_loaded });

        if already_loaded {
            tracing::debug!(module = %self.library.id(), "Module already loaded");
            self.refresh_content();
        } else {
            self.pending = Some(self.cache.request_load(&self.library));
        }
    }

    pub fn on_tick(&mut self) {
        self.dispatch(DeferredIntent::AnimationTick);
    }

    /// Mount if needed and apply a settlement that arrived since the last
    /// call, so [`state`](Self::state) is current before anything reads it.
    pub fn sync(&mut self) {
        self.mount();
        self.poll_settlement();
    }

    /// Resolve what to show this frame. Mounts the view on first call, with
    /// the same runtime requirement as [`mount`](Self::mount).
    pub fn build(&mut self) -> Rendered<'_, C> {
        self.sync();

        if self.state.is_ready() {
            self.refresh_content();
            if let Some(built) = &self.built {
                return Rendered::Content(&built.content);
            }
        }

        Rendered::Placeholder {
            placeholder: self.placeholder(),
            animation_tick: self.state.animation_tick(),
        }
    }

    /// Wait for the module and apply the outcome.
    ///
    /// Returns the load error if the module failed; the failure notification
    /// is dispatched once regardless of how many times this is awaited.
    pub async fn ready(&mut self) -> Result<(), LoadError> {
        self.mount();

        if let Some(pending) = self.pending.clone() {
            let result = pending.wait().await;
            self.apply(result);
        }

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn dispatch(&mut self, intent: DeferredIntent) {
        let previous = std::mem::take(&mut self.state);
        self.state = DeferredReducer::reduce(previous, intent);
    }

    fn poll_settlement(&mut self) {
        if !self.state.is_loading() {
            return;
        }
        let Some(pending) = &self.pending else {
            return;
        };

        let result = match pending.status() {
            LoadStatus::Pending => return,
            LoadStatus::Loaded => Ok(()),
            LoadStatus::Failed(err) => Err(err),
        };
        self.apply(result);
    }

    fn apply(&mut self, result: Result<(), LoadError>) {
        if !self.state.is_loading() {
            return;
        }
        self.pending = None;

        match result {
            Ok(()) => {
                self.dispatch(DeferredIntent::Loaded);
                self.refresh_content();
                tracing::debug!(module = %self.library.id(), "Deferred view ready");
            }
            Err(error) => {
                self.dispatch(DeferredIntent::Failed {
                    message: error.to_string(),
                });
                let failure = LoadFailure {
                    module: self.library.id().clone(),
                    error: error.clone(),
                };
                self.failure = Some(error);
                self.scope.dispatch(&failure);
            }
        }
    }

    fn refresh_content(&mut self) {
        let stale = match &self.built {
            Some(built) => !built.builder.same_as(&self.builder),
            None => true,
        };
        if stale {
            tracing::trace!(module = %self.library.id(), "Building deferred content");
            self.built = Some(Built {
                builder: self.builder.clone(),
                content: self.builder.build(),
            });
        }
    }

    fn placeholder(&self) -> Placeholder {
        self.placeholder
            .clone()
            .or_else(|| self.scope.placeholder())
            .unwrap_or_default()
    }
}

impl<C> fmt::Debug for DeferredView<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredView")
            .field("module", self.library.id())
            .field("state", &self.state)
            .field("scope", &self.scope.name())
            .field("has_content", &self.built.is_some())
            .finish_non_exhaustive()
    }
}

/// One frame of a deferred view.
pub enum Rendered<'a, C> {
    Placeholder {
        placeholder: Placeholder,
        animation_tick: u8,
    },
    Content(&'a C),
}

impl<'a, C> Rendered<'a, C> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Rendered::Placeholder { .. })
    }

    pub fn content(&self) -> Option<&'a C> {
        match self {
            Rendered::Content(content) => Some(*content),
            Rendered::Placeholder { .. } => None,
        }
    }
}

impl<'a, C> Widget for Rendered<'a, C>
where
    &'a C: Widget,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self {
            Rendered::Content(content) => content.render(area, buf),
            Rendered::Placeholder {
                placeholder,
                animation_tick,
            } => placeholder.render(area, buf, animation_tick),
        }
    }
}
