use tokio::sync::watch;

use crate::loader::{LoadError, ModuleId};

/// Settlement state of one load.
#[derive(Debug, Clone)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed(LoadError),
}

impl LoadStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadStatus::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded)
    }
}

/// Shared handle to an in-flight or settled load.
///
/// Every clone observes the same settlement. Dropping a handle does not
/// cancel the load.
#[derive(Debug, Clone)]
pub struct PendingLoad {
    module: ModuleId,
    status: watch::Receiver<LoadStatus>,
}

impl PendingLoad {
    pub(crate) fn new(module: ModuleId, status: watch::Receiver<LoadStatus>) -> Self {
        Self { module, status }
    }

    pub fn module(&self) -> &ModuleId {
        &self.module
    }

    /// Current status without waiting.
    pub fn status(&self) -> LoadStatus {
        self.status.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        self.status.borrow().is_settled()
    }

    /// Wait until the load settles.
    pub async fn wait(&self) -> Result<(), LoadError> {
        let mut status = self.status.clone();
        let waited = status
            .wait_for(LoadStatus::is_settled)
            .await
            .map(|settled| settled.clone());
        let settled = match waited {
            Ok(settled) => settled,
            // The loader task went away; whatever it last published is final.
            Err(_) => status.borrow().clone(),
        };

        match settled {
            LoadStatus::Loaded => Ok(()),
            LoadStatus::Failed(err) => Err(err),
            LoadStatus::Pending => Err(LoadError::Aborted {
                module: self.module.clone(),
            }),
        }
    }
}
