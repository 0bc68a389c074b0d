//! Deferred-loading view.
//!
//! [`DeferredView`] wraps one component whose backing module loads on first
//! use. The phase lives in [`DeferredState`] and only changes through
//! [`DeferredReducer`]; the view owns the built content and the
//! [`ContentBuilder`] that produced it.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DeferredIntent;
pub use reducer::DeferredReducer;
pub use state::DeferredState;
pub use view::{ContentBuilder, DeferredView, Rendered};
