use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::loader::{BoxError, ModuleId};

/// Future returned by a library's loader.
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send + 'static>>;

type LoaderFn = dyn Fn() -> LoadFuture + Send + Sync;

/// A deferred module: its identity and the zero-argument async function that
/// fetches and initializes it.
#[derive(Clone)]
pub struct Library {
    id: ModuleId,
    loader: Arc<LoaderFn>,
}

impl Library {
    pub fn new<F, Fut, E>(id: impl Into<ModuleId>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        let loader = move || -> LoadFuture {
            let future = loader();
            Box::pin(async move { future.await.map_err(Into::into) })
        };
        Self {
            id: id.into(),
            loader: Arc::new(loader),
        }
    }

    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    pub(crate) fn invoke(&self) -> LoadFuture {
        (self.loader)()
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library").field("id", &self.id).finish_non_exhaustive()
    }
}
