//! Module loading: identities, loaders, and the shared load cache.
//!
//! A [`Library`] pairs a [`ModuleId`] with the async function that fetches
//! and initializes the module. [`LoadCache`] runs each library's loader at
//! most once and hands every caller the same [`PendingLoad`].

mod cache;
mod error;
mod library;
mod module_id;
mod pending;

pub use cache::{FailurePolicy, LoadCache};
pub use error::{BoxError, LoadError};
pub use library::{Library, LoadFuture};
pub use module_id::ModuleId;
pub use pending::{LoadStatus, PendingLoad};
