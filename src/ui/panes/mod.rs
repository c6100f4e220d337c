//! TUI pane rendering modules
//!
//! - [`bars`]: the array as a bar chart, coloured by active/eliminated state
//! - [`description`]: algorithm title, explanation, input and result
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane exports a single stateless `render_*` function.

pub mod bars;
pub mod description;
pub mod status;

pub use bars::render_bars_pane;
pub use description::render_description_pane;
pub use status::render_status_bar;
