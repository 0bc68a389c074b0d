//! Shared load cache.
//!
//! Keyed by [`ModuleId`]. Each id gets one [`PendingLoad`] for the lifetime of
//! the cache; ids whose load succeeded are also recorded in a loaded set so
//! callers can skip the async path entirely.

use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::config::LoaderConfig;
use crate::loader::{Library, LoadError, LoadStatus, ModuleId, PendingLoad};

/// What happens to a cache entry whose load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The failed entry stays; later requests get the same failure.
    #[default]
    Retain,
    /// The failed entry is dropped once it settles; the next request invokes
    /// the loader again.
    Evict,
}

/// Registry of module loads, shared by every deferred view that should see the
/// same modules.
///
/// Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct LoadCache {
    inner: Arc<Mutex<CacheInner>>,
    policy: FailurePolicy,
}

#[derive(Debug, Default)]
struct CacheInner {
    pending: HashMap<ModuleId, PendingLoad>,
    loaded: HashSet<ModuleId>,
}

impl LoadCache {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheInner::default())),
            policy,
        }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.failure_policy())
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Return the load for `library`, starting it if this is the first request
    /// for its id.
    ///
    /// The loader is invoked synchronously and driven on the current Tokio
    /// runtime. Outside a runtime the loader is not invoked and the returned
    /// load is already settled as [`LoadError::Aborted`]; nothing is cached, so
    /// a later request from inside a runtime starts the load normally.
    pub fn request_load(&self, library: &Library) -> PendingLoad {
        let id = library.id().clone();
        let Ok(handle) = Handle::try_current() else {
            tracing::warn!(module = %id, "No Tokio runtime to drive the module load");
            let (_, rx) = watch::channel(LoadStatus::Failed(LoadError::Aborted {
                module: id.clone(),
            }));
            return PendingLoad::new(id, rx);
        };

        let (tx, pending) = {
            let mut inner = self.inner.lock();
            if let Some(existing) = inner.pending.get(&id) {
                tracing::debug!(module = %id, "Reusing existing module load");
                return existing.clone();
            }
            let (tx, rx) = watch::channel(LoadStatus::Pending);
            let pending = PendingLoad::new(id.clone(), rx);
            inner.pending.insert(id.clone(), pending.clone());
            (tx, pending)
        };

        tracing::info!(module = %id, "Loading module");
        let future = library.invoke();
        let cache = self.clone();
        handle.spawn(async move {
            let status = match tokio::spawn(future).await {
                Ok(Ok(())) => LoadStatus::Loaded,
                Ok(Err(err)) => LoadStatus::Failed(LoadError::failed(id.clone(), err)),
                Err(join_err) => {
                    tracing::warn!(module = %id, error = %join_err, "Module loader task aborted");
                    LoadStatus::Failed(LoadError::Aborted { module: id.clone() })
                }
            };
            cache.settle(&id, &status);
            tx.send_replace(status);
        });

        pending
    }

    /// Whether the module's load has completed successfully.
    pub fn is_loaded(&self, id: &ModuleId) -> bool {
        self.inner.lock().loaded.contains(id)
    }

    /// Status of the module's load, or `None` if it was never requested (or
    /// its failure was evicted).
    pub fn status(&self, id: &ModuleId) -> Option<LoadStatus> {
        self.inner.lock().pending.get(id).map(PendingLoad::status)
    }

    /// Number of module loads tracked.
    pub fn len(&self) -> usize {
        self.inner.lock().pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Runs before the status is published so that awaiters woken by a success
    // already see the id in the loaded set.
    fn settle(&self, id: &ModuleId, status: &LoadStatus) {
        let mut inner = self.inner.lock();
        match status {
            LoadStatus::Loaded => {
                inner.loaded.insert(id.clone());
                tracing::info!(module = %id, "Module loaded");
            }
            LoadStatus::Failed(err) => {
                tracing::warn!(module = %id, error = %err, "Module load failed");
                if self.policy == FailurePolicy::Evict {
                    inner.pending.remove(id);
                    tracing::debug!(module = %id, "Evicted failed module load");
                }
            }
            LoadStatus::Pending => {}
        }
    }
}
