//! Terminal replay viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: replay state, keyboard event loop, auto-play
//! - **[`panes`]**: stateless render functions for each visible pane (bars,
//!   description, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Replay`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Replay`]: crate::engine::Replay
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
