use std::sync::Arc;
use thiserror::Error;

use crate::loader::ModuleId;

/// Error type a loader may fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Module load failure.
///
/// Cloneable so that every awaiter of the same load observes the same value.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The loader ran to completion and reported an error.
    #[error("Failed to load module '{module}': {source}")]
    Failed {
        module: ModuleId,
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The loader task stopped (panicked or was cancelled) before settling.
    #[error("Loader for module '{module}' stopped before settling")]
    Aborted { module: ModuleId },
}

impl LoadError {
    pub(crate) fn failed(module: ModuleId, source: BoxError) -> Self {
        LoadError::Failed {
            module,
            source: Arc::from(source),
        }
    }

    /// The module whose load failed.
    pub fn module(&self) -> &ModuleId {
        match self {
            LoadError::Failed { module, .. } | LoadError::Aborted { module } => module,
        }
    }

    /// The error the loader itself raised, if it got that far.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            LoadError::Failed { source, .. } => Some(source.as_ref()),
            LoadError::Aborted { .. } => None,
        }
    }
}
