pub mod app;
pub mod deferred;
pub mod events;
pub mod mvi;
pub mod placeholder;
pub mod runtime;
pub mod scope;
pub mod terminal_guard;
pub mod theme;
