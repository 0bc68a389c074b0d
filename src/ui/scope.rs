//! Ancestor chain for deferred views.
//!
//! A [`Scope`] stands for an enclosing component. Deferred views hold the
//! scope they are mounted under; load failures bubble from that scope up to
//! the root, and the nearest scope carrying a placeholder provides the
//! default one.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

use crate::loader::{LoadError, ModuleId};
use crate::ui::placeholder::Placeholder;

/// Notification dispatched when a deferred view's module fails to load.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub module: ModuleId,
    pub error: LoadError,
}

/// Whether a notification keeps bubbling after a listener has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

type Listener = Arc<dyn Fn(&LoadFailure) -> Propagation + Send + Sync>;

pub struct Scope {
    name: String,
    parent: Option<Arc<Scope>>,
    placeholder: Option<Placeholder>,
    listeners: Mutex<Vec<Listener>>,
}

impl Scope {
    pub fn root() -> Arc<Self> {
        Arc::new(Self {
            name: "root".to_string(),
            parent: None,
            placeholder: None,
            listeners: Mutex::new(Vec::new()),
        })
    }

    pub fn child(self: &Arc<Self>, name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            parent: Some(Arc::clone(self)),
            placeholder: None,
            listeners: Mutex::new(Vec::new()),
        })
    }

    /// Child scope that supplies `placeholder` to every descendant without
    /// one of its own.
    pub fn child_with_placeholder(
        self: &Arc<Self>,
        name: impl Into<String>,
        placeholder: Placeholder,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            parent: Some(Arc::clone(self)),
            placeholder: Some(placeholder),
            listeners: Mutex::new(Vec::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Arc<Scope>> {
        self.parent.as_ref()
    }

    /// Listen for load failures raised in this scope or any descendant.
    ///
    /// Listeners run in registration order. A listener may register further
    /// listeners or mount views that dispatch again. A listener registered
    /// during a dispatch is first called by the next one.
    pub fn on_load_failure<F>(&self, listener: F)
    where
        F: Fn(&LoadFailure) -> Propagation + Send + Sync + 'static,
    {
        self.listeners.lock().push(Arc::new(listener));
    }

    /// Nearest placeholder supplied by this scope or an ancestor.
    pub fn placeholder(&self) -> Option<Placeholder> {
        self.ancestors().find_map(|scope| scope.placeholder.clone())
    }

    /// Bubble `failure` from this scope to the root, innermost first.
    ///
    /// Returns `true` if a listener stopped propagation.
    pub fn dispatch(&self, failure: &LoadFailure) -> bool {
        for scope in self.ancestors() {
            let listeners = scope.listeners.lock().clone();
            for listener in &listeners {
                if listener(failure) == Propagation::Stop {
                    tracing::debug!(
                        module = %failure.module,
                        scope = %scope.name,
                        "Load failure handled"
                    );
                    return true;
                }
            }
        }

        tracing::warn!(
            module = %failure.module,
            error = %failure.error,
            "Load failure reached the root unhandled"
        );
        false
    }

    fn ancestors(&self) -> impl Iterator<Item = &Scope> {
        std::iter::successors(Some(self), |&scope| scope.parent.as_deref())
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("name", &self.name)
            .field("parent", &self.parent.as_ref().map(|p| p.name.as_str()))
            .field("placeholder", &self.placeholder)
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}
