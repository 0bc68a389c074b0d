//! Deferred loading for terminal UI components.
//!
//! A [`DeferredView`](ui::deferred::DeferredView) shows a placeholder until
//! its module's loader has run, then builds its content. Loads are shared
//! through a [`LoadCache`](loader::LoadCache): each module loads at most once,
//! and views mounted after it has loaded render their content on the first
//! frame. Failures bubble up a [`Scope`](ui::scope::Scope) chain to whichever
//! ancestor listens.

pub mod config;
pub mod loader;
pub mod logging;
pub mod ui;
